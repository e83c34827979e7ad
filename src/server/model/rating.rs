/// Derived rating fields stored on a book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place, 0 when unreviewed.
    pub average: f64,
    pub count: i32,
}

impl RatingSummary {
    /// Computes the summary from every rating a book has received.
    ///
    /// Rounds half away from zero on the first decimal place.
    pub fn from_ratings(ratings: &[i32]) -> Self {
        if ratings.is_empty() {
            return Self {
                average: 0.0,
                count: 0,
            };
        }

        let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
        let count = ratings.len();
        let average = (sum as f64 * 10.0 / count as f64).round() / 10.0;

        Self {
            average,
            count: count as i32,
        }
    }
}
