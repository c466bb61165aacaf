//! Search Module Tests
//!
//! Validates keyword handling, weighted scoring, slide range aggregation,
//! video ranking and the lecture slide listing.
//!
//! ## Test Scopes
//! - **Keywords**: Lowercasing, de-duplication and blank filtering.
//! - **Scoring**: Field weights accumulate; case never matters.
//! - **Aggregation**: Per-lecture slide ranges and top-N video ranking.
//! - **Handlers**: Request validation and response shapes.

#[cfg(test)]
mod tests {
    use crate::config::{SlideWeights, VideoWeights};
    use crate::error::ServiceError;
    use crate::search::engine::{rank_slides, rank_videos, search};
    use crate::search::handlers::{handle_get_lecture, handle_search};
    use crate::search::keywords::KeywordSet;
    use crate::search::lectures::slides_for_lecture;
    use crate::search::scoring::score;
    use crate::search::types::{
        LectureRequest, SearchRequest, SearchResponse, SlideMatch, SlideRecord, VideoMatch,
        VideoRecord,
    };
    use crate::test_utils::Fixture;
    use axum::http::StatusCode;
    use axum::{Extension, Json};

    fn keywords(list: &[&str]) -> KeywordSet {
        KeywordSet::new(list)
    }

    fn slide(lecture: &str, number: u32, title: &str, text: &str, notes: &str) -> SlideRecord {
        SlideRecord {
            lecture: lecture.to_string(),
            slide_number: number,
            slide_title: title.to_string(),
            slide_text: text.to_string(),
            presenter_notes: notes.to_string(),
        }
    }

    fn video(title: &str, url: &str, transcript: &str, tags: &str) -> VideoRecord {
        VideoRecord {
            title: title.to_string(),
            url: url.to_string(),
            transcript: transcript.to_string(),
            keywords: tags.to_string(),
        }
    }

    // ============================================================
    // KEYWORD SET TESTS
    // ============================================================

    #[test]
    fn test_keywords_lowercased_and_deduplicated() {
        let set = keywords(&["Graph", "GRAPH", "tree", "Tree"]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["graph", "tree"]);
    }

    #[test]
    fn test_keyword_whitespace_is_kept() {
        let set = keywords(&["graph ", "graph"]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["graph ", "graph"]);
    }

    #[test]
    fn test_blank_keywords_dropped() {
        let set = keywords(&["", "   "]);
        assert!(set.is_empty());
    }

    // ============================================================
    // SCORING TESTS
    // ============================================================

    #[test]
    fn test_score_single_field_hit() {
        assert_eq!(score(&[("Intro to Graphs", 3)], &keywords(&["graph"])), 3);
    }

    #[test]
    fn test_score_no_hit_is_zero() {
        assert_eq!(score(&[("a", 1), ("b", 2)], &keywords(&["z"])), 0);
    }

    #[test]
    fn test_score_ignores_keyword_case() {
        let upper = score(&[("Graph", 1)], &keywords(&["GRAPH"]));
        let lower = score(&[("Graph", 1)], &keywords(&["graph"]));

        assert_eq!(upper, lower);
        assert_eq!(upper, 1);
    }

    #[test]
    fn test_score_accumulates_across_fields_and_keywords() {
        let fields = [("graph search", 3), ("search notes", 2), ("graph body", 1)];

        // graph: 3 + 1, search: 3 + 2
        assert_eq!(score(&fields, &keywords(&["graph", "search"])), 9);
    }

    #[test]
    fn test_score_trailing_space_needs_literal_match() {
        assert_eq!(score(&[("graphs", 1)], &keywords(&["graph "])), 0);
        assert_eq!(score(&[("graph search", 1)], &keywords(&["GRAPH "])), 1);
    }

    #[test]
    fn test_score_empty_keywords_is_zero() {
        assert_eq!(score(&[("anything", 5)], &KeywordSet::default()), 0);
    }

    // ============================================================
    // SLIDE AGGREGATION TESTS
    // ============================================================

    #[test]
    fn test_slide_range_spans_min_to_max_hit() {
        let slides = vec![
            slide("L1", 2, "graph", "", ""),
            slide("L1", 5, "", "graph", ""),
            slide("L1", 4, "unrelated", "", ""),
            slide("L1", 3, "", "", "graph"),
        ];

        let ranges = rank_slides(&slides, &SlideWeights::default(), &keywords(&["graph"]));

        assert_eq!(
            ranges,
            vec![SlideMatch {
                lecture: "L1".to_string(),
                slide_range: [2, 5]
            }]
        );
    }

    #[test]
    fn test_slide_ranges_grouped_by_raw_label() {
        let slides = vec![
            slide("Lecture 5", 1, "heap", "", ""),
            slide("5", 9, "heap", "", ""),
            slide("Lecture 5", 3, "heap", "", ""),
        ];

        let ranges = rank_slides(&slides, &SlideWeights::default(), &keywords(&["heap"]));

        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].lecture, "Lecture 5");
        assert_eq!(ranges[0].slide_range, [1, 3]);
        assert_eq!(ranges[1].lecture, "5");
        assert_eq!(ranges[1].slide_range, [9, 9]);
    }

    #[test]
    fn test_zero_weight_field_does_not_hit() {
        let slides = vec![slide("L1", 1, "", "", "graph in notes only")];
        let weights = SlideWeights {
            title: 3,
            notes: 0,
            body: 1,
        };

        assert!(rank_slides(&slides, &weights, &keywords(&["graph"])).is_empty());
    }

    // ============================================================
    // VIDEO RANKING TESTS
    // ============================================================

    #[test]
    fn test_videos_sorted_by_score_and_limited() {
        let videos = vec![
            video("graph 1", "a", "", ""),
            video("other", "b", "graph", ""),
            video("graph 2", "c", "graph", "graph"),
            video("graph 3", "d", "", "graph"),
            video("nothing", "e", "", ""),
        ];

        let hits = rank_videos(&videos, &VideoWeights::default(), &keywords(&["graph"]), 3);
        let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
        let scores: Vec<u32> = hits.iter().map(|h| h.score).collect();

        assert_eq!(urls, vec!["c", "d", "a"]);
        assert_eq!(scores, vec![6, 5, 3]);
    }

    #[test]
    fn test_video_ties_keep_file_order() {
        let videos = vec![
            video("x", "first", "graph", ""),
            video("y", "second", "graph", ""),
            video("z", "third", "graph", ""),
            video("w", "fourth", "graph", ""),
        ];

        let hits = rank_videos(&videos, &VideoWeights::default(), &keywords(&["graph"]), 3);
        let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();

        assert_eq!(urls, vec!["first", "second", "third"]);
    }

    // ============================================================
    // SEARCH OVER DATASETS
    // ============================================================

    #[test]
    fn test_search_sample_datasets() {
        let fixture = Fixture::new();
        let config = &fixture.config;

        let response = search(
            &fixture.catalog(),
            &config.scoring,
            config.video_limit,
            &keywords(&["graph"]),
        )
        .unwrap();

        assert_eq!(
            response.slide_matches,
            vec![
                SlideMatch {
                    lecture: "L1".to_string(),
                    slide_range: [2, 5]
                },
                SlideMatch {
                    lecture: "Lecture 3".to_string(),
                    slide_range: [7, 7]
                },
            ]
        );
        assert_eq!(
            response.video_matches,
            vec![
                VideoMatch {
                    title: "Graph Algorithms".to_string(),
                    url: "https://videos.example/graphs".to_string(),
                    score: 5
                },
                VideoMatch {
                    title: "Trees and Graphs".to_string(),
                    url: "https://videos.example/trees".to_string(),
                    score: 4
                },
                VideoMatch {
                    title: "Graph Coloring".to_string(),
                    url: "https://videos.example/coloring".to_string(),
                    score: 3
                },
            ]
        );
    }

    #[test]
    fn test_search_is_repeatable() {
        let fixture = Fixture::new();
        let catalog = fixture.catalog();
        let config = &fixture.config;
        let kws = keywords(&["graph", "hash"]);

        let first = search(&catalog, &config.scoring, config.video_limit, &kws).unwrap();
        let second = search(&catalog, &config.scoring, config.video_limit, &kws).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_search_empty_keywords_matches_nothing() {
        let fixture = Fixture::new();
        let config = &fixture.config;

        let response =
            search(&fixture.catalog(), &config.scoring, config.video_limit, &keywords(&[])).unwrap();

        assert_eq!(response, SearchResponse::default());
    }

    #[test]
    fn test_search_missing_dataset_fails_whole_request() {
        let fixture = Fixture::new();
        std::fs::remove_file(&fixture.config.datasets.videos).unwrap();
        let config = &fixture.config;

        let err = search(
            &fixture.catalog(),
            &config.scoring,
            config.video_limit,
            &keywords(&["graph"]),
        )
        .unwrap_err();

        assert!(matches!(err, ServiceError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_response_uses_wire_field_names() {
        let response = SearchResponse {
            slide_matches: vec![SlideMatch {
                lecture: "L1".to_string(),
                slide_range: [2, 5],
            }],
            video_matches: vec![VideoMatch {
                title: "T".to_string(),
                url: "U".to_string(),
                score: 3,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["SlideMatches"][0]["Lecture"], "L1");
        assert_eq!(json["SlideMatches"][0]["SlideRange"], serde_json::json!([2, 5]));
        assert_eq!(json["VideoMatches"][0]["Title"], "T");
        assert_eq!(json["VideoMatches"][0]["URL"], "U");
        assert_eq!(json["VideoMatches"][0]["Score"], 3);
    }

    #[test]
    fn test_empty_response_serializes_to_empty_lists() {
        let json = serde_json::to_value(SearchResponse::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"SlideMatches": [], "VideoMatches": []})
        );
    }

    // ============================================================
    // LECTURE SLIDE FILTER TESTS
    // ============================================================

    #[test]
    fn test_slides_for_lecture_case_insensitive() {
        let fixture = Fixture::new();

        let slides = slides_for_lecture(&fixture.catalog(), "l1").unwrap();
        let numbers: Vec<u32> = slides.iter().map(|s| s.slide_number).collect();

        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_slides_for_lecture_is_not_normalized() {
        let fixture = Fixture::new();

        let err = slides_for_lecture(&fixture.catalog(), "3").unwrap_err();
        assert!(matches!(err, ServiceError::NoSlidesFound(_)));

        let slides = slides_for_lecture(&fixture.catalog(), "LECTURE 3").unwrap();
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_slides_for_lecture_compares_labels_literally() {
        let fixture = Fixture::new();

        let err = slides_for_lecture(&fixture.catalog(), " L1 ").unwrap_err();
        assert!(matches!(err, ServiceError::NoSlidesFound(_)));
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_search_ok() {
        let fixture = Fixture::new();
        let req = SearchRequest {
            keywords: vec!["Hash".to_string()],
        };

        let Json(response) = handle_search(Extension(fixture.context()), Ok(Json(req)))
            .await
            .unwrap();

        assert_eq!(response.slide_matches.len(), 1);
        assert_eq!(response.slide_matches[0].lecture, "L2");
        assert_eq!(response.slide_matches[0].slide_range, [1, 1]);
        assert_eq!(response.video_matches[0].title, "Hash Tables");
    }

    #[tokio::test]
    async fn test_handle_search_empty_keywords() {
        let fixture = Fixture::new();

        let Json(response) = handle_search(
            Extension(fixture.context()),
            Ok(Json(SearchRequest::default())),
        )
        .await
        .unwrap();

        assert!(response.slide_matches.is_empty());
        assert!(response.video_matches.is_empty());
    }

    #[tokio::test]
    async fn test_handle_get_lecture_ok() {
        let fixture = Fixture::new();
        let req = LectureRequest {
            lecture: Some("L2".to_string()),
        };

        let Json(response) = handle_get_lecture(Extension(fixture.context()), Ok(Json(req)))
            .await
            .unwrap();

        assert_eq!(response.slides.len(), 2);
        assert_eq!(response.slides[1].slide_title, "Collisions");
    }

    #[tokio::test]
    async fn test_handle_get_lecture_missing_field() {
        let fixture = Fixture::new();

        let err = handle_get_lecture(
            Extension(fixture.context()),
            Ok(Json(LectureRequest::default())),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_get_lecture_unknown() {
        let fixture = Fixture::new();
        let req = LectureRequest {
            lecture: Some("L99".to_string()),
        };

        let err = handle_get_lecture(Extension(fixture.context()), Ok(Json(req)))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_handle_get_lecture_missing_dataset() {
        let fixture = Fixture::new();
        std::fs::remove_file(&fixture.config.datasets.slides).unwrap();
        let req = LectureRequest {
            lecture: Some("L1".to_string()),
        };

        let err = handle_get_lecture(Extension(fixture.context()), Ok(Json(req)))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
