use crate::models::Recommendation;
use std::time::Duration;

/// Artificial latency so the client's loading states see realistic timing
pub const MOCK_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Deterministic stand-in for the live Claude call
///
/// Returns five hand-authored recommendations with the city and age bounds
/// interpolated into the text fields. Only used when mock mode is enabled.
pub async fn fetch_mock_recommendations(
    city: &str,
    min_age: u8,
    max_age: u8,
) -> Vec<Recommendation> {
    tokio::time::sleep(MOCK_RESPONSE_DELAY).await;

    vec![
        Recommendation {
            title: format!("{} Children's Discovery Museum", city),
            emoji: "🔬".to_string(),
            location: Some(format!("Downtown {}", city)),
            distance: Some("3.2 miles".to_string()),
            description: format!(
                "This interactive science museum is perfect for kids aged {}-{}, featuring hands-on exhibits about physics, biology, and technology. Entry costs around $15 per child with family memberships available. Plan for 2-3 hours of exploration. Open weekends from 10am-5pm with special Saturday workshops.",
                min_age, max_age
            ),
        },
        Recommendation {
            title: format!("{} Adventure Park", city),
            emoji: "🎡".to_string(),
            location: Some(format!("{} Westside", city)),
            distance: Some("5.7 miles".to_string()),
            description: "An outdoor adventure park with age-appropriate climbing walls, zip lines, and obstacle courses for children. Professional instructors provide safety equipment and guidance. Costs approximately $25-35 per child for a 2-hour session. Advance booking recommended for weekend slots.".to_string(),
        },
        Recommendation {
            title: format!("{} Public Library - Main Branch", city),
            emoji: "📚".to_string(),
            location: Some(format!("Central {}", city)),
            distance: Some("2.1 miles".to_string()),
            description: "Free weekend program featuring interactive storytelling, arts and crafts, and educational activities. Perfect for all ages with sessions grouped by age range. No registration required, just drop in on Saturday mornings at 10am. Includes take-home craft projects.".to_string(),
        },
        Recommendation {
            title: format!("Nature Trail at {} Regional Park", city),
            emoji: "🌲".to_string(),
            location: Some(format!("{} North", city)),
            distance: Some("8.4 miles".to_string()),
            description: "Family-friendly hiking trail with easy terrain suitable for young children. Features educational nature signs, a small playground at the halfway point, and picnic areas. Completely free with ample parking. Trail is 1.5 miles round-trip and takes about 90 minutes with kids.".to_string(),
        },
        Recommendation {
            title: format!("{} Community Aquatic Center", city),
            emoji: "🏊".to_string(),
            location: Some(format!("{} Southside", city)),
            distance: Some("4.6 miles".to_string()),
            description: "Indoor heated pool with designated family swim times on Saturday afternoons. Includes shallow areas for young children and fun water features. Lifeguards on duty and swimming lessons available. Entry fee is $8 per person with family passes available at discounted rates.".to_string(),
        },
    ]
}
