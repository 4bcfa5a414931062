// Integration tests for Weekend Scout

use weekend_scout::core::{build_prompt, parse_recommendations};
use weekend_scout::models::{ContentBlock, MessagesResponse, RecommendationRequest};

fn create_request(city: &str, min_age: u8, max_age: u8) -> RecommendationRequest {
    RecommendationRequest {
        city: city.to_string(),
        min_age,
        max_age,
        availability: "Saturday afternoon".to_string(),
        max_distance: 10.0,
        preferences: None,
    }
}

fn synthetic_block(
    title: &str,
    emoji: &str,
    location: &str,
    distance: &str,
    description: &str,
) -> String {
    format!(
        "**{title} {emoji}**\n📍 Location: {location}\n🚗 Distance: {distance}\n{description}\n\n"
    )
}

fn response_with(text: &str) -> MessagesResponse {
    MessagesResponse {
        content: vec![ContentBlock::text(text)],
    }
}

#[test]
fn test_prompt_is_byte_identical_for_same_request() {
    let first = build_prompt(&create_request("Austin", 5, 12));
    let second = build_prompt(&create_request("Austin", 5, 12));

    assert_eq!(first, second);
}

#[test]
fn test_prompt_age_range_rendering() {
    let collapsed = build_prompt(&create_request("Austin", 5, 5));
    assert!(collapsed.contains("**Children's Ages**: 5\n"));

    let spread = build_prompt(&create_request("Austin", 5, 12));
    assert!(spread.contains("**Children's Ages**: 5-12\n"));
}

#[test]
fn test_parser_round_trip_preserves_fields_and_order() {
    let inputs = [
        ("Discovery Museum", "🔬", "Downtown", "3.2 miles"),
        ("Adventure Park", "🎡", "Westside", "5.7 miles"),
        ("Main Library", "📚", "Central", "2.1 miles"),
        ("Nature Trail", "🌲", "North", "8.4 miles"),
        ("Aquatic Center", "🏊", "Southside", "4.6 miles"),
    ];

    let text: String = inputs
        .iter()
        .map(|(title, emoji, location, distance)| {
            synthetic_block(
                title,
                emoji,
                location,
                distance,
                &format!("A great stop at {}. Plan for a couple of hours.", title),
            )
        })
        .collect();

    let records = parse_recommendations(&response_with(&text));

    assert_eq!(records.len(), 5);
    for (record, (title, emoji, location, distance)) in records.iter().zip(inputs.iter()) {
        assert_eq!(record.title, *title);
        assert_eq!(record.emoji, *emoji);
        assert_eq!(record.location.as_deref(), Some(*location));
        assert_eq!(record.distance.as_deref(), Some(*distance));
        assert_eq!(
            record.description,
            format!("A great stop at {}. Plan for a couple of hours.", title)
        );
    }
}

#[test]
fn test_parser_consumes_the_layout_the_prompt_pins() {
    // A reply that follows the prompt's format instructions to the letter
    // must parse back without loss.
    let prompt = build_prompt(&create_request("Austin", 5, 12));
    assert!(prompt.contains("**[Activity Name] [emoji]**"));

    let reply = synthetic_block(
        "Zilker Park Playground",
        "🌳",
        "South Austin",
        "2.5 miles from city center",
        "A sprawling playground next to the botanical garden. Free to enter and easy to reach by bus. Pack a picnic for the lawn.",
    );

    let records = parse_recommendations(&response_with(&reply));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Zilker Park Playground");
    assert_eq!(records[0].location.as_deref(), Some("South Austin"));
    assert_eq!(
        records[0].distance.as_deref(),
        Some("2.5 miles from city center")
    );
}

#[test]
fn test_parser_degrades_on_empty_reply() {
    let records = parse_recommendations(&MessagesResponse { content: vec![] });

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Error");
}

#[test]
fn test_parser_degrades_on_reply_without_bold_titles() {
    let records = parse_recommendations(&response_with(
        "I'm sorry, I wasn't able to find activities for that area.",
    ));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Error");
    assert_eq!(records[0].emoji, "⚠️");
}

#[test]
fn test_parser_truncates_to_five() {
    let text: String = (0..7)
        .map(|i| {
            synthetic_block(
                &format!("Option {}", i),
                "🎯",
                "Somewhere",
                "1.0 miles",
                "Something to do with the kids for an afternoon.",
            )
        })
        .collect();

    let records = parse_recommendations(&response_with(&text));

    assert_eq!(records.len(), 5);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.title, format!("Option {}", i));
    }
}

#[test]
fn test_emoji_extraction_from_title() {
    let records = parse_recommendations(&response_with(
        "**Museum 🔬**\n📍 Location: Downtown\n🚗 Distance: 3.2 miles\nHands-on exhibits for curious kids.\n\n",
    ));
    assert_eq!(records[0].title, "Museum");
    assert_eq!(records[0].emoji, "🔬");

    let records = parse_recommendations(&response_with(
        "**Museum**\n📍 Location: Downtown\n🚗 Distance: 3.2 miles\nHands-on exhibits for curious kids.\n\n",
    ));
    assert_eq!(records[0].title, "Museum");
    assert_eq!(records[0].emoji, "🎯");
}
