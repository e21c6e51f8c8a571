#[cfg(test)]
mod tests {
    use shared::candidates;
    use shared::models::Category;
    use crate::rate_limiter::RateLimiter;

    #[test]
    fn limiter_allows_up_to_max() {
        let limiter = RateLimiter::new(3, 1);
        for _ in 0..3 {
            assert!(limiter.check("device-a").is_ok());
        }
        assert!(limiter.check("device-a").is_err());
    }

    #[test]
    fn limiter_keys_are_independent() {
        let limiter = RateLimiter::new(1, 1);
        assert!(limiter.check("device-a").is_ok());
        assert!(limiter.check("device-b").is_ok());
        assert!(limiter.check("device-a").is_err());
    }

    #[test]
    fn limiter_rejection_names_the_wait() {
        let limiter = RateLimiter::new(1, 1);
        limiter.check("device-a").unwrap();
        let err = limiter.check("device-a").unwrap_err();
        assert!(err.error.contains("too quickly"), "unexpected message: {}", err.error);
    }

    #[test]
    fn roster_backs_vote_validation() {
        // cast_vote rejects ids outside the roster and category mismatches;
        // both checks resolve through the shared roster.
        let mayor = candidates::find("anna-parkes").unwrap();
        assert_eq!(mayor.category, Category::Mayor);
        assert!(candidates::find("not-a-candidate").is_none());

        let councillor = candidates::find("hemi-walker").unwrap();
        assert_ne!(councillor.category, Category::Mayor);
    }
}
