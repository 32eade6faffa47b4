//! DOM `keyCode` values the simulation reacts to.

pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_F: u32 = 70;
pub const KEY_L: u32 = 76;
pub const KEY_P: u32 = 80;
pub const KEY_S: u32 = 83;
pub const KEY_W: u32 = 87;

/// Movement keys forwarded to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
}

impl Arrow {
    pub fn from_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_LEFT => Some(Arrow::Left),
            KEY_RIGHT => Some(Arrow::Right),
            KEY_UP => Some(Arrow::Up),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_codes() {
        assert_eq!(Arrow::from_code(KEY_LEFT), Some(Arrow::Left));
        assert_eq!(Arrow::from_code(KEY_RIGHT), Some(Arrow::Right));
        assert_eq!(Arrow::from_code(KEY_UP), Some(Arrow::Up));
        assert_eq!(Arrow::from_code(40), None);
        assert_eq!(Arrow::from_code(KEY_W), None);
    }
}
