//! Cursor tracking example.
//!
//! Replays keystrokes against an in-memory field and prints where the caret
//! lands after every reformat.
//!
//! Run with: `cargo run --example cursor`

use input_mask::{register_cursor_tracker, CursorTrackerOptions, Mask, NumeralOptions, TextInput};

#[derive(Default)]
struct Field {
    value: String,
    caret: usize,
}

enum Key {
    Char(char),
    Backspace,
    Left,
}

impl Field {
    fn press(&mut self, key: &Key) {
        let mut chars: Vec<char> = self.value.chars().collect();
        match *key {
            Key::Char(c) => {
                chars.insert(self.caret, c);
                self.caret += 1;
            }
            Key::Backspace if self.caret > 0 => {
                chars.remove(self.caret - 1);
                self.caret -= 1;
            }
            Key::Backspace => {}
            Key::Left => self.caret = self.caret.saturating_sub(1),
        }
        self.value = chars.into_iter().collect();
    }

    fn show(&self) -> String {
        let before: String = self.value.chars().take(self.caret).collect();
        let after: String = self.value.chars().skip(self.caret).collect();
        format!("{}|{}", before, after)
    }
}

impl TextInput for Field {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn selection_end(&self) -> usize {
        self.caret
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_selection_range(&mut self, _start: usize, end: usize) {
        self.caret = end;
    }
}

fn replay(title: &str, mask: &Mask, keys: &[Key]) {
    println!("--- {} ---\n", title);

    let mut field = Field::default();
    let options = CursorTrackerOptions::with_delimiters(&mask.delimiters()).prefix(mask.prefix());
    let mut registration = register_cursor_tracker(Some(&mut field), options);

    for key in keys {
        let label = match key {
            Key::Char(c) => c.to_string(),
            Key::Backspace => "⌫".to_string(),
            Key::Left => "←".to_string(),
        };

        if let Some(input) = registration.input_mut() {
            input.press(key);
        }
        // moving the caret does not fire an input event
        if !matches!(key, Key::Left) {
            registration.handle_input(|raw| mask.format(raw));
        }
        if let Some(input) = registration.input_mut() {
            println!("  {:>2}  {}", label, input.show());
        }
    }

    registration.detach();
    println!();
}

fn main() {
    println!("=== Cursor Tracking ===\n");

    let typed = |s: &str| s.chars().map(Key::Char).collect::<Vec<_>>();

    let card: Mask = "credit-card".parse().unwrap();
    replay("Typing a card number", &card, &typed("4111111111111111"));

    let mut keys = typed("41111111");
    keys.extend([Key::Left, Key::Left, Key::Left, Key::Left, Key::Left, Key::Char('9')]);
    keys.extend([Key::Backspace, Key::Backspace]);
    replay("Editing in the middle", &card, &keys);

    let date: Mask = "date".parse().unwrap();
    replay("Typing a date", &date, &typed("31122023"));

    let dollars = Mask::from(NumeralOptions {
        prefix: "$".to_string(),
        ..Default::default()
    });
    replay("Typing an amount", &dollars, &typed("1234567.89"));
}
