use crate::models::{RecommendRouteInput, RecommendRouteOutput};
use crate::services::ai::{LlmProvider, Message};

const SYSTEM_PROMPT: &str = r#"You are a route recommendation expert. Given the user's location and the Experience Center location, provide a detailed route recommendation to the user.

Both locations are given as "latitude,longitude". Describe the route in plain prose: the general direction of travel, the main roads or landmarks along the way, and a rough travel time by car.

Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "routeRecommendation": "the recommended route from the user location to the Experience Center"
}
"#;

pub fn render_prompt(input: &RecommendRouteInput) -> String {
    format!(
        "User Location: {}\nExperience Center Location: {}\n\nRoute Recommendation: ",
        input.user_location, input.experience_center_location
    )
}

pub async fn recommend_route(
    llm: &dyn LlmProvider,
    input: &RecommendRouteInput,
) -> anyhow::Result<RecommendRouteOutput> {
    let messages = [Message::user(render_prompt(input))];
    let response = llm.chat(SYSTEM_PROMPT, &messages).await?;
    parse_route_response(&response)
}

fn parse_route_response(response: &str) -> anyhow::Result<RecommendRouteOutput> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        anyhow::bail!("model returned an empty route recommendation");
    }

    if let Some(output) = try_parse(trimmed) {
        return Ok(output);
    }

    let cleaned = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Some(output) = try_parse(cleaned) {
        return Ok(output);
    }

    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if start < end {
            if let Some(output) = try_parse(&cleaned[start..=end]) {
                return Ok(output);
            }
        }
    }

    tracing::warn!("route response was not JSON, using raw text");
    Ok(RecommendRouteOutput {
        route_recommendation: trimmed.to_string(),
    })
}

fn try_parse(s: &str) -> Option<RecommendRouteOutput> {
    serde_json::from_str::<RecommendRouteOutput>(s)
        .ok()
        .filter(|o| !o.route_recommendation.trim().is_empty())
}
