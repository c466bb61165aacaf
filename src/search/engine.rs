use super::keywords::KeywordSet;
use super::scoring::score;
use super::types::{SearchResponse, SlideMatch, SlideRecord, VideoMatch, VideoRecord};
use crate::config::{ScoringConfig, SlideWeights, VideoWeights};
use crate::dataset::{DatasetCatalog, DatasetKind};
use crate::error::ServiceResult;
use std::collections::HashMap;

/// Runs a keyword search over the slide and video datasets.
///
/// An empty keyword set matches nothing and returns without touching storage.
pub fn search(
    catalog: &DatasetCatalog,
    scoring: &ScoringConfig,
    video_limit: usize,
    keywords: &KeywordSet,
) -> ServiceResult<SearchResponse> {
    if keywords.is_empty() {
        return Ok(SearchResponse::default());
    }

    let slides = catalog.load::<SlideRecord>(DatasetKind::Slides)?;
    let videos = catalog.load::<VideoRecord>(DatasetKind::Videos)?;

    let response = SearchResponse {
        slide_matches: rank_slides(&slides, &scoring.slides, keywords),
        video_matches: rank_videos(&videos, &scoring.videos, keywords, video_limit),
    };

    tracing::debug!(
        "Search over {} slides / {} videos: {} lectures, {} videos matched",
        slides.len(),
        videos.len(),
        response.slide_matches.len(),
        response.video_matches.len()
    );

    Ok(response)
}

/// Groups slide hits by their raw lecture label into `[min, max]` ranges.
///
/// Lectures are listed in the order their first hit appears in the dataset.
pub fn rank_slides(
    slides: &[SlideRecord],
    weights: &SlideWeights,
    keywords: &KeywordSet,
) -> Vec<SlideMatch> {
    let mut ranges: Vec<SlideMatch> = Vec::new();
    let mut by_lecture: HashMap<&str, usize> = HashMap::new();

    for slide in slides {
        let fields = [
            (slide.slide_title.as_str(), weights.title),
            (slide.presenter_notes.as_str(), weights.notes),
            (slide.slide_text.as_str(), weights.body),
        ];
        if score(&fields, keywords) == 0 {
            continue;
        }

        let n = slide.slide_number;
        match by_lecture.get(slide.lecture.as_str()) {
            Some(&idx) => {
                let range = &mut ranges[idx].slide_range;
                range[0] = range[0].min(n);
                range[1] = range[1].max(n);
            }
            None => {
                by_lecture.insert(slide.lecture.as_str(), ranges.len());
                ranges.push(SlideMatch {
                    lecture: slide.lecture.clone(),
                    slide_range: [n, n],
                });
            }
        }
    }

    ranges
}

/// Scores videos and returns the best `limit` hits, highest score first.
/// Equal scores keep dataset order.
pub fn rank_videos(
    videos: &[VideoRecord],
    weights: &VideoWeights,
    keywords: &KeywordSet,
    limit: usize,
) -> Vec<VideoMatch> {
    let mut hits: Vec<VideoMatch> = videos
        .iter()
        .filter_map(|video| {
            let fields = [
                (video.title.as_str(), weights.title),
                (video.keywords.as_str(), weights.keywords),
                (video.transcript.as_str(), weights.transcript),
            ];
            let total = score(&fields, keywords);
            (total > 0).then(|| VideoMatch {
                title: video.title.clone(),
                url: video.url.clone(),
                score: total,
            })
        })
        .collect();

    // `sort_by` is stable.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}
