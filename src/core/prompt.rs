use crate::models::RecommendationRequest;

/// Collapse the age bounds into the display form used throughout the prompt:
/// a single number when the bounds are equal, otherwise "min-max"
pub fn age_range_label(min_age: u8, max_age: u8) -> String {
    if min_age == max_age {
        format!("{}", min_age)
    } else {
        format!("{}-{}", min_age, max_age)
    }
}

/// Render a validated request into the instruction string sent upstream
///
/// Pure and deterministic: the same request always produces the same
/// bytes. The per-recommendation layout pinned under "Format each
/// recommendation EXACTLY as follows" is the contract the parser splits
/// on; its delimiters must not drift.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    let ages = age_range_label(request.min_age, request.max_age);
    let preferences = request
        .preferences
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or("None specified");

    format!(
        "I need 5 weekend activity recommendations for a family with the following details:

**Location**: {city}
**Children's Ages**: {ages}
**When They're Free**: {availability}
**Max Travel Distance**: {distance} miles from {city}
**Additional Preferences**: {preferences}

Please use your web search capabilities to find current, real activities and events in {city} that match these criteria.

Requirements:
1. All activities must be:
   - Age-appropriate for children aged {ages}
   - Located within {distance} miles of {city}
   - Available or suitable for {availability}
   - Family-friendly and safe
   - Varied in type (mix of indoor/outdoor, active/educational, free/paid, etc.)

2. For each recommendation, provide:
   - A descriptive title with a relevant emoji
   - Specific location (neighborhood/area within {city})
   - Distance from {city} center (in miles)
   - 2-4 sentences explaining:
     * What the activity is
     * Why it's great for this family
     * Any practical details (approximate cost, duration, special considerations)

3. Format each recommendation EXACTLY as follows:
**[Activity Name] [emoji]**
📍 Location: [Specific area/neighborhood]
🚗 Distance: [X.X miles from city center]
[2-4 sentence description here]

4. Search for current, real events and venues. If you find specific events happening during {availability}, prioritize those.

Please provide exactly 5 recommendations now.",
        city = request.city,
        ages = ages,
        availability = request.availability,
        distance = request.max_distance,
        preferences = preferences,
    )
}
