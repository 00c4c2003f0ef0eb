use pewinput::Capability;
use pewinput::codes::*;

/// A character as typed on a US layout: the key and whether shift is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub key: Capability,
    pub shift: bool,
}

impl Stroke {
    fn plain(key: Capability) -> Self {
        Self { key, shift: false }
    }

    fn shifted(key: Capability) -> Self {
        Self { key, shift: true }
    }
}

const LETTERS: [Capability; 26] = [
    KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F, KEY_G, KEY_H, KEY_I, KEY_J, KEY_K, KEY_L, KEY_M,
    KEY_N, KEY_O, KEY_P, KEY_Q, KEY_R, KEY_S, KEY_T, KEY_U, KEY_V, KEY_W, KEY_X, KEY_Y, KEY_Z,
];

const DIGITS: [Capability; 10] = [
    KEY_0, KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9,
];

// Shifted symbols on the digit row, indexed like DIGITS
const DIGIT_SYMBOLS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

const PUNCTUATION: [(char, char, Capability); 11] = [
    ('-', '_', KEY_MINUS),
    ('=', '+', KEY_EQUAL),
    ('[', '{', KEY_LEFTBRACE),
    (']', '}', KEY_RIGHTBRACE),
    ('\\', '|', KEY_BACKSLASH),
    (';', ':', KEY_SEMICOLON),
    ('\'', '"', KEY_APOSTROPHE),
    ('`', '~', KEY_GRAVE),
    (',', '<', KEY_COMMA),
    ('.', '>', KEY_DOT),
    ('/', '?', KEY_SLASH),
];

pub fn stroke_for(c: char) -> Option<Stroke> {
    match c {
        'a'..='z' => Some(Stroke::plain(LETTERS[c as usize - 'a' as usize])),
        'A'..='Z' => Some(Stroke::shifted(LETTERS[c as usize - 'A' as usize])),
        '0'..='9' => Some(Stroke::plain(DIGITS[c as usize - '0' as usize])),
        ' ' => Some(Stroke::plain(KEY_SPACE)),
        '\n' => Some(Stroke::plain(KEY_ENTER)),
        '\t' => Some(Stroke::plain(KEY_TAB)),
        _ => {
            if let Some(i) = DIGIT_SYMBOLS.iter().position(|&s| s == c) {
                return Some(Stroke::shifted(DIGITS[i]));
            }
            PUNCTUATION.iter().find_map(|&(plain, shifted, key)| {
                if c == plain {
                    Some(Stroke::plain(key))
                } else if c == shifted {
                    Some(Stroke::shifted(key))
                } else {
                    None
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_case() {
        assert_eq!(stroke_for('h'), Some(Stroke::plain(KEY_H)));
        assert_eq!(stroke_for('H'), Some(Stroke::shifted(KEY_H)));
        assert_eq!(stroke_for('z'), Some(Stroke::plain(KEY_Z)));
    }

    #[test]
    fn digit_row_symbols_need_shift() {
        assert_eq!(stroke_for('1'), Some(Stroke::plain(KEY_1)));
        assert_eq!(stroke_for('!'), Some(Stroke::shifted(KEY_1)));
        assert_eq!(stroke_for(')'), Some(Stroke::shifted(KEY_0)));
    }

    #[test]
    fn punctuation_and_whitespace() {
        assert_eq!(stroke_for(','), Some(Stroke::plain(KEY_COMMA)));
        assert_eq!(stroke_for('?'), Some(Stroke::shifted(KEY_SLASH)));
        assert_eq!(stroke_for(' '), Some(Stroke::plain(KEY_SPACE)));
        assert_eq!(stroke_for('\n'), Some(Stroke::plain(KEY_ENTER)));
        assert_eq!(stroke_for('é'), None);
    }

    #[test]
    fn every_stroke_fits_the_keyboard_template() {
        let keyboard = pewinput::DeviceTemplates::keyboard();
        for c in "Hello, World! 0123456789 `~-_=+[]{}\\|;:'\"<>/?".chars() {
            let stroke = stroke_for(c).unwrap();
            assert!(keyboard.capabilities.contains(&stroke.key), "{c:?}");
        }
        assert!(keyboard.capabilities.contains(&KEY_LEFTSHIFT));
    }
}
