use tunnel_core::ShapeKind;

/// What a key press asks the front-end to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    Reset,
    Shape(ShapeKind),
    ToggleFullscreen,
    ExitFullscreen,
    ToggleHint,
}

#[inline]
pub fn shape_for_digit(key: &str) -> Option<ShapeKind> {
    match key {
        "1" => Some(ShapeKind::Circle),
        "2" => Some(ShapeKind::Square),
        "3" => Some(ShapeKind::Triangle),
        "4" => Some(ShapeKind::Hexagon),
        _ => None,
    }
}

/// Whether a focused element takes typed text, so shortcuts must stay off.
#[inline]
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|t| tag_name.eq_ignore_ascii_case(t))
}

/// Shortcut for a key press, or `None` while the user is typing in a field.
#[inline]
pub fn action_for_event(key: &str, in_text_entry: bool) -> Option<KeyAction> {
    if in_text_entry {
        return None;
    }
    action_for_key(key)
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(kind) = shape_for_digit(key) {
        return Some(KeyAction::Shape(kind));
    }
    match key {
        " " => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::Reset),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}
