//! Deterministic interior-design prompt construction.
//!
//! Maps a `(room, theme)` pair to a natural-language prompt. Dispatch is an
//! exact case-sensitive match over six known room categories; anything else
//! falls back to a generic decor sentence built from the room name itself.
//! No randomness and no external state, so the mapping is table-testable.

pub const DEFAULT_THEME: &str = "default theme";
pub const DEFAULT_ROOM: &str = "default room";

/// Substitute the literal defaults for empty or missing inputs.
pub fn apply_defaults(room: Option<&str>, theme: Option<&str>) -> (String, String) {
    let room = match room {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => DEFAULT_ROOM.to_string(),
    };
    let theme = match theme {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => DEFAULT_THEME.to_string(),
    };
    (room, theme)
}

/// Build the prompt sent to the prediction API.
///
/// The theme is lower-cased and interpolated into a room-specific template.
/// Unknown rooms get the fallback sentence with the lower-cased room name.
pub fn build_prompt(room: &str, theme: &str) -> String {
    let theme = theme.to_lowercase();
    match room {
        "Living Room" => format!(
            "a {theme} living room with a comfortable and stylish sofa, elegant coffee table, ambient lighting, decorative cushions, and wall art."
        ),
        "Bedroom" => format!(
            "a serene {theme} bedroom with a plush bed, soft lighting, bedside tables with lamps, a cozy rug, and framed pictures."
        ),
        "Kitchen" => format!(
            "a modern {theme} kitchen with sleek cabinetry, energy-efficient appliances, a kitchen island, pendant lights, and bar stools."
        ),
        "Bathroom" => format!(
            "a luxurious {theme} bathroom with a walk-in shower, freestanding bathtub, vanity with large mirror, and scented candles."
        ),
        "Dining Room" => format!(
            "an inviting {theme} dining room with a large dining table, comfortable chairs, statement lighting, and a sideboard."
        ),
        "Home Office" => format!(
            "a functional {theme} home office with a sturdy desk, ergonomic chair, open shelving, task lighting, and motivational posters."
        ),
        other => format!(
            "a tastefully decorated {} with attention to color scheme, furniture arrangement, and decorative accessories to enhance the overall ambiance.",
            other.to_lowercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rooms_use_their_template() {
        let cases = [
            ("Living Room", "a modern living room with a comfortable and stylish sofa, elegant coffee table, ambient lighting, decorative cushions, and wall art."),
            ("Bedroom", "a serene modern bedroom with a plush bed, soft lighting, bedside tables with lamps, a cozy rug, and framed pictures."),
            ("Kitchen", "a modern modern kitchen with sleek cabinetry, energy-efficient appliances, a kitchen island, pendant lights, and bar stools."),
            ("Bathroom", "a luxurious modern bathroom with a walk-in shower, freestanding bathtub, vanity with large mirror, and scented candles."),
            ("Dining Room", "an inviting modern dining room with a large dining table, comfortable chairs, statement lighting, and a sideboard."),
            ("Home Office", "a functional modern home office with a sturdy desk, ergonomic chair, open shelving, task lighting, and motivational posters."),
        ];
        for (room, expected) in cases {
            assert_eq!(build_prompt(room, "Modern"), expected, "room: {room}");
        }
    }

    #[test]
    fn theme_is_lowercased_verbatim() {
        let prompt = build_prompt("Bedroom", "Coastal");
        assert_eq!(
            prompt,
            "a serene coastal bedroom with a plush bed, soft lighting, bedside tables with lamps, a cozy rug, and framed pictures."
        );
    }

    #[test]
    fn unknown_room_uses_generic_fallback() {
        let prompt = build_prompt("Garage", "Industrial");
        assert_eq!(
            prompt,
            "a tastefully decorated garage with attention to color scheme, furniture arrangement, and decorative accessories to enhance the overall ambiance."
        );
    }

    #[test]
    fn dispatch_is_case_sensitive() {
        // "bedroom" is not a known category, so it takes the fallback path.
        let prompt = build_prompt("bedroom", "Coastal");
        assert!(prompt.starts_with("a tastefully decorated bedroom"));
    }

    #[test]
    fn defaults_substitute_missing_or_empty_inputs() {
        assert_eq!(
            apply_defaults(None, None),
            (DEFAULT_ROOM.to_string(), DEFAULT_THEME.to_string())
        );
        assert_eq!(
            apply_defaults(Some(""), Some("")),
            (DEFAULT_ROOM.to_string(), DEFAULT_THEME.to_string())
        );
        assert_eq!(
            apply_defaults(Some("Kitchen"), Some("Rustic")),
            ("Kitchen".to_string(), "Rustic".to_string())
        );
    }

    #[test]
    fn default_room_takes_fallback_template() {
        let prompt = build_prompt(DEFAULT_ROOM, DEFAULT_THEME);
        assert!(prompt.contains("default room"));
    }
}
