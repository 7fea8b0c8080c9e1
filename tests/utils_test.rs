use chrono::{Duration, Utc};
use cragline::types::DisciplineFlags;
use cragline::utils::*;

// Helper function to build discipline flags from pairs
fn create_flags(pairs: &[(&str, bool)]) -> DisciplineFlags {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_media_id_is_deterministic() {
    let a = media_id_from_filename("/users/u1/photo.jpg");
    let b = media_id_from_filename("/users/u1/photo.jpg");
    assert_eq!(a, b);

    // Different inputs should yield different ids
    let c = media_id_from_filename("/users/u1/photo2.jpg");
    assert_ne!(a, c);

    // Stable across processes: v5 is a pure function of the input
    assert_eq!(
        a,
        uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, b"/users/u1/photo.jpg")
    );
}

#[test]
fn test_sanitize_name_strips_leading_tokens() {
    assert_eq!(sanitize_name("(6) My Route"), "My Route");
    assert_eq!(sanitize_name("1-My Route"), "My Route");
    assert_eq!(sanitize_name("a.My Route"), "My Route");
    assert_eq!(sanitize_name("ab. My Route"), "My Route");
}

#[test]
fn test_sanitize_name_noop_cases() {
    // No decorative prefix - unchanged
    assert_eq!(sanitize_name("My Route"), "My Route");

    // Only the first, left-anchored token is stripped
    assert_eq!(sanitize_name("(6) (7) My Route"), "(7) My Route");

    // Tokens not at the start are untouched
    assert_eq!(sanitize_name("My (6) Route"), "My (6) Route");

    assert_eq!(sanitize_name(""), "");
}

#[test]
fn test_simplify_discipline_flags_drops_false_keys() {
    let flags = create_flags(&[("sport", true), ("bouldering", false)]);
    let simplified = simplify_discipline_flags(&flags);

    assert_eq!(simplified.len(), 1);
    assert_eq!(simplified.get("sport"), Some(&true));
    assert!(!simplified.contains_key("bouldering"));

    // Pure transform - the input keeps its false key
    assert!(flags.contains_key("bouldering"));
}

#[test]
fn test_disciplines_to_flags() {
    let flags = disciplines_to_flags(&["sport".to_string(), "trad".to_string()]);
    assert_eq!(flags.len(), 2);
    assert_eq!(flags.get("sport"), Some(&true));
    assert_eq!(flags.get("trad"), Some(&true));

    assert!(disciplines_to_flags(&[]).is_empty());
}

#[test]
fn test_check_username_valid_names() {
    assert!(check_username("validUser_1"));
    assert!(check_username("alice"));
    assert!(check_username("a.b-c_d"));
    assert!(check_username("x"));
}

#[test]
fn test_check_username_rejects_reserved() {
    assert!(!check_username("admin123"));
    assert!(!check_username("Admin"));
    assert!(!check_username("cragline99"));
    assert!(!check_username("CragLine"));
    assert!(!check_username("cragl1ne"));
}

#[test]
fn test_check_username_rejects_bad_format_and_length() {
    // Over 30 characters
    assert!(!check_username(&"x".repeat(31)));
    assert!(check_username(&"x".repeat(30)));

    // Separators cannot lead, trail or repeat
    assert!(!check_username("_leading"));
    assert!(!check_username("trailing."));
    assert!(!check_username("a..b"));
    assert!(!check_username("has space"));
    assert!(!check_username(""));
}

#[test]
fn test_check_website_url() {
    assert!(check_website_url("example.com"));
    assert!(check_website_url("www.example.com"));
    assert!(check_website_url("https://www.example.com/path?q=1"));
    assert!(check_website_url("http://example.io/climbing"));

    // Whitespace anywhere is rejected
    assert!(!check_website_url("exam ple.com"));

    // Too short
    assert!(!check_website_url("ab"));
    assert!(!check_website_url(""));

    // Not URL-shaped
    assert!(!check_website_url("not_a_url"));
}

#[test]
fn test_url_resolver_known_codes() {
    assert_eq!(url_resolver(0, "abc"), Some("/climbs/abc".to_string()));
    assert_eq!(url_resolver(1, "abc"), Some("/areas/abc".to_string()));
    assert_eq!(url_resolver(3, "abc"), Some("/u/abc".to_string()));
}

#[test]
fn test_url_resolver_unknown_codes() {
    assert_eq!(url_resolver(2, "abc"), None);
    assert_eq!(url_resolver(4, "abc"), None);
    assert_eq!(url_resolver(-1, "abc"), None);
}

#[test]
fn test_user_home_url() {
    assert_eq!(
        user_home_url("https://cragline.example", "some-uuid"),
        "https://cragline.example/u/some-uuid"
    );
}

#[test]
fn test_relative_date_recent_past() {
    let three_days = Utc::now() - Duration::days(3);
    assert_eq!(relative_date(three_days), "3 days ago");

    let one_day = Utc::now() - Duration::days(1);
    assert_eq!(relative_date(one_day), "1 day ago");

    let just_now = Utc::now();
    assert_eq!(relative_date(just_now), "0 seconds ago");
}

#[test]
fn test_relative_date_future() {
    // A minute of slack keeps the truncated value stable while the test runs
    let soon = Utc::now() + Duration::hours(2) + Duration::minutes(1);
    assert_eq!(relative_date(soon), "in 2 hours");
}

#[test]
fn test_relative_date_over_a_year() {
    let old = Utc::now() - Duration::days(400);
    assert_eq!(relative_date(old), old.format("%b %Y").to_string());
}

#[test]
fn test_percents_sum_to_100() {
    // Each record carries exactly one true flag
    let records = vec![
        create_flags(&[("sport", true)]),
        create_flags(&[("sport", true)]),
        create_flags(&[("trad", true)]),
        create_flags(&[("bouldering", true)]),
    ];

    let breakdown = compute_climbing_percents_and_colors(&records);

    // Three observed disciplines, in color-table order
    assert_eq!(breakdown.percents.len(), 3);
    assert_eq!(breakdown.colors.len(), 3);
    assert_eq!(breakdown.percents, vec![50.0, 25.0, 25.0]);

    let sum: f64 = breakdown.percents.iter().sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_percents_colors_follow_table_order() {
    let records = vec![create_flags(&[("trad", true), ("sport", true)])];
    let breakdown = compute_climbing_percents_and_colors(&records);

    // sport precedes trad in the color table regardless of map iteration
    assert_eq!(breakdown.colors[0], DISCIPLINE_COLORS[0].1);
    assert_eq!(breakdown.colors[1], DISCIPLINE_COLORS[1].1);
    assert_eq!(breakdown.percents, vec![50.0, 50.0]);
}

#[test]
fn test_percents_all_false_yields_nan() {
    // Observed discipline with zero true flags: 0/0 stays NaN by design
    let records = vec![create_flags(&[("sport", false)])];
    let breakdown = compute_climbing_percents_and_colors(&records);

    assert_eq!(breakdown.percents.len(), 1);
    assert!(breakdown.percents[0].is_nan());
}

#[test]
fn test_percents_empty_input() {
    let breakdown = compute_climbing_percents_and_colors(&[]);
    assert!(breakdown.percents.is_empty());
    assert!(breakdown.colors.is_empty());
}
