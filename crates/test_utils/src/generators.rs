//! Property-based and randomized test data generators

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use proptest::prelude::*;

use domain_reviews::{NewReviewer, ThumbsRating};

use crate::fixtures::StringFixtures;

/// Strategy for valid star ratings
pub fn star_rating_strategy() -> impl Strategy<Value = i16> {
    0i16..=5
}

/// Strategy for star ratings outside the valid range
pub fn invalid_star_rating_strategy() -> impl Strategy<Value = i16> {
    prop_oneof![i16::MIN..0, 6..=i16::MAX]
}

/// Strategy for thumbs verdicts
pub fn thumbs_strategy() -> impl Strategy<Value = ThumbsRating> {
    prop_oneof![Just(ThumbsRating::Up), Just(ThumbsRating::Down)]
}

/// Strategy for valid usernames
pub fn username_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{2,19}").expect("valid regex")
}

/// A randomized but valid reviewer payload
///
/// The username carries a unique suffix so generated reviewers never
/// collide on the uniqueness constraints.
pub fn random_reviewer() -> NewReviewer {
    let full_name: String = fake::faker::name::en::Name().fake();
    NewReviewer {
        username: StringFixtures::unique_username(),
        email: random_email(),
        full_name: Some(full_name),
    }
}

/// A randomized well-formed email with a unique local part
pub fn random_email() -> String {
    let base: String = SafeEmail().fake();
    // Prefix the local part to make collisions impossible across calls
    format!("{}.{base}", &StringFixtures::unique_username())
}

/// A short randomized review text
pub fn random_review_text() -> String {
    Sentence(4..12).fake()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_reviews::ReviewValidator;

    proptest! {
        #[test]
        fn prop_generated_usernames_are_valid(username in username_strategy()) {
            let input = NewReviewer {
                username,
                email: "probe@example.com".to_string(),
                full_name: None,
            };
            prop_assert!(ReviewValidator::validate_new_reviewer(&input).is_valid);
        }

        #[test]
        fn prop_valid_ratings_in_range(rating in star_rating_strategy()) {
            prop_assert!((0..=5).contains(&rating));
        }

        #[test]
        fn prop_invalid_ratings_out_of_range(rating in invalid_star_rating_strategy()) {
            prop_assert!(!(0..=5).contains(&rating));
        }
    }

    #[test]
    fn test_random_reviewer_is_valid() {
        for _ in 0..10 {
            let input = random_reviewer();
            assert!(
                ReviewValidator::validate_new_reviewer(&input).is_valid,
                "generated reviewer failed validation: {input:?}"
            );
        }
    }

    #[test]
    fn test_random_review_text_not_blank() {
        assert!(!random_review_text().trim().is_empty());
    }
}
