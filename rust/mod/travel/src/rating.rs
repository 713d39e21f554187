//! Per-place rating aggregation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::Comment;

/// Mean rating and comment count for one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Mean of the rated comments, rounded to one decimal.
    pub mean: f64,
    /// Number of comments, rated or not.
    pub count: usize,
}

impl RatingSummary {
    /// What a place with no comments shows.
    pub const EMPTY: RatingSummary = RatingSummary { mean: 0.0, count: 0 };

    /// Five-character star bar, `★` for each whole point of the mean.
    pub fn stars(&self) -> String {
        star_bar(self.mean.floor() as usize)
    }
}

impl Default for RatingSummary {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for RatingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.mean)
    }
}

/// Place id → summary. Ordered so output is independent of input order.
pub type RatingMap = BTreeMap<String, RatingSummary>;

/// Group comments by place and compute mean rating and count.
///
/// Places without comments are absent; use [`rating_for`] to read with the
/// `0.0 / 0` default.
pub fn aggregate(comments: &[Comment]) -> RatingMap {
    #[derive(Default)]
    struct Acc {
        total: u32,
        rated: u32,
        count: usize,
    }

    let mut acc: BTreeMap<&str, Acc> = BTreeMap::new();
    for c in comments {
        let entry = acc.entry(c.place_id.as_str()).or_default();
        entry.count += 1;
        if let Some(r) = c.rating {
            entry.total += u32::from(r);
            entry.rated += 1;
        }
    }

    acc.into_iter()
        .map(|(place_id, a)| {
            let mean = if a.rated == 0 {
                0.0
            } else {
                round1(f64::from(a.total) / f64::from(a.rated))
            };
            (place_id.to_string(), RatingSummary { mean, count: a.count })
        })
        .collect()
}

/// Summary for `place_id`, or [`RatingSummary::EMPTY`].
pub fn rating_for(map: &RatingMap, place_id: &str) -> RatingSummary {
    map.get(place_id).copied().unwrap_or(RatingSummary::EMPTY)
}

/// Round half away from zero to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// `★★★☆☆` for `filled = 3`. Values above 5 are clamped.
pub fn star_bar(filled: usize) -> String {
    let filled = filled.min(5);
    let mut s = "★".repeat(filled);
    s.push_str(&"☆".repeat(5 - filled));
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, place: &str, rating: Option<u8>) -> Comment {
        Comment {
            id: id.into(),
            author: "user_a".into(),
            place_id: place.into(),
            body: String::new(),
            date: "2023-10-25".into(),
            rating,
            place_name: None,
        }
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn count_matches_comments_per_place() {
        let cs = vec![
            comment("c1", "p1", Some(5)),
            comment("c2", "p2", Some(4)),
            comment("c3", "p1", Some(3)),
            comment("c4", "p1", Some(4)),
        ];
        let map = aggregate(&cs);
        assert_eq!(map.len(), 2);
        assert_eq!(map["p1"].count, 3);
        assert_eq!(map["p2"].count, 1);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        let cs = vec![
            comment("c1", "p1", Some(5)),
            comment("c2", "p1", Some(4)),
            comment("c3", "p1", Some(4)),
        ];
        // 13 / 3 = 4.333…
        assert_eq!(aggregate(&cs)["p1"].mean, 4.3);

        let cs = vec![comment("c1", "p1", Some(5)), comment("c2", "p1", Some(4))];
        assert_eq!(aggregate(&cs)["p1"].mean, 4.5);

        let cs = vec![
            comment("c1", "p1", Some(5)),
            comment("c2", "p1", Some(5)),
            comment("c3", "p1", Some(4)),
        ];
        // 14 / 3 = 4.666…
        assert_eq!(aggregate(&cs)["p1"].mean, 4.7);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut cs = vec![
            comment("c1", "p2", Some(1)),
            comment("c2", "p1", Some(5)),
            comment("c3", "p2", Some(2)),
            comment("c4", "p3", Some(3)),
        ];
        let forward = aggregate(&cs);
        cs.reverse();
        assert_eq!(forward, aggregate(&cs));
    }

    #[test]
    fn unrated_comments_count_but_do_not_move_the_mean() {
        let cs = vec![
            comment("c1", "p1", Some(4)),
            comment("c2", "p1", None),
            comment("c3", "p2", None),
        ];
        let map = aggregate(&cs);
        assert_eq!(map["p1"], RatingSummary { mean: 4.0, count: 2 });
        assert_eq!(map["p2"], RatingSummary { mean: 0.0, count: 1 });
    }

    #[test]
    fn missing_place_defaults_to_empty() {
        let map = aggregate(&[comment("c1", "p1", Some(5))]);
        assert_eq!(rating_for(&map, "p9"), RatingSummary::EMPTY);
        assert_eq!(rating_for(&map, "p9").to_string(), "0.0");
        assert_eq!(rating_for(&map, "p1").to_string(), "5.0");
    }

    #[test]
    fn stars_follow_whole_points() {
        let s = RatingSummary { mean: 3.7, count: 2 };
        assert_eq!(s.stars(), "★★★☆☆");
        assert_eq!(RatingSummary::EMPTY.stars(), "☆☆☆☆☆");
        assert_eq!(star_bar(9), "★★★★★");
    }
}
