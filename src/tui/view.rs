//! Panel rendering.

use charpass::CharacterClass;
use charpass::rand::source_name;

use super::panel::{Panel, Status, length_hint};
use crate::terminal::{
    BOX_INNER, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_top, clear,
    flush, print_rule, wrap_chars,
};

const PLACEHOLDER: &str = "Press Enter to generate a password.";

pub fn draw(panel: &Panel) {
    clear();
    box_top("charpass");

    box_line("");
    match panel.password() {
        Some(pass) => {
            for line in wrap_chars(pass, BOX_INNER) {
                box_line(&line);
            }
        }
        None => box_line_center(&format!("{DIM}{PLACEHOLDER}{RESET}")),
    }
    box_line("");

    print_rule();
    box_line(&format!(
        "Length: {}  {DIM}({}, -/+ or \u{2190}/\u{2192}, \u{2193}/\u{2191} by 10){RESET}",
        panel.settings.length,
        length_hint()
    ));
    let classes = panel.settings.classes();
    for (n, class) in CharacterClass::ALL.into_iter().enumerate() {
        let mark = if classes.contains(class) { "x" } else { " " };
        box_line(&format!("  {}) [{mark}] {}", n + 1, class.label()));
    }

    print_rule();
    match panel.status() {
        Status::Idle => box_line(&format!("{DIM}Entropy source: {}{RESET}", source_name())),
        Status::Info(msg) => box_line(&format!("{GREEN}{msg}{RESET}")),
        Status::Error(msg) => box_line(&format!("{RED}{msg}{RESET}")),
    }
    box_line("[Enter] generate  [c] copy  [s] save defaults  [q] quit");
    box_bottom();
    flush();
}
