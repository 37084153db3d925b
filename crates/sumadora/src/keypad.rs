//! Keypad model
//!
//! Platform-neutral model of the on-screen pad: the button set, the grid
//! layout (including the double-width zero key), press-state feedback, and
//! hit-testing from pad-relative cell coordinates. Rendering lives in the
//! TUI layer.

use crate::engine::{Engine, Operator};

/// Visual classes of the pad
///
/// The frontend styles each class differently: plain digit keys, the
/// operator/equals action column, and the function row across the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    /// Digit and decimal point keys
    Digit,
    /// Operator column and equals
    Action,
    /// Clear, sign toggle, percent
    Function,
}

/// Actions that keypad buttons perform
///
/// Each maps to exactly one engine operation: the twelve digit and decimal
/// buttons to `append_digit`, the four operator buttons to `set_operator`,
/// and one button each for equals, clear, sign toggle, and percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert the decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Compute and settle the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
    /// Negate the current operand
    ToggleSign,
    /// Divide the current operand by one hundred
    Percent,
}

impl ButtonKind {
    /// Returns the character shown on the key face
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.glyph(),
            Self::Equals => '=',
            Self::Clear => 'C',
            Self::ToggleSign => '±',
            Self::Percent => '%',
        }
    }

    /// Returns the visual class this button belongs to
    #[must_use]
    pub const fn class(self) -> ButtonClass {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonClass::Digit,
            Self::Operator(_) | Self::Equals => ButtonClass::Action,
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonClass::Function,
        }
    }

    /// Maps a typed character to the button it activates
    ///
    /// Digits, `.` (also `,`, the key-face label on some pads), operator
    /// characters in ASCII or glyph form, `=`, `c`, `%`, and `n`/`±` for
    /// the sign toggle. Anything else activates no button.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self::Digit(ch as u8 - b'0')),
            '.' | ',' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '%' => Some(Self::Percent),
            'n' | '±' => Some(Self::ToggleSign),
            _ => Operator::from_char(ch).map(Self::Operator),
        }
    }

    /// Routes this button press into the engine operation it is wired to
    pub fn press(self, engine: &mut Engine) {
        match self {
            Self::Digit(d) => {
                if let Some(ch) = char::from_digit(u32::from(d), 10) {
                    engine.append_digit(ch);
                }
            }
            Self::Decimal => engine.append_digit('.'),
            Self::Operator(op) => engine.set_operator(op),
            Self::Equals => engine.equals(),
            Self::Clear => engine.clear(),
            Self::ToggleSign => engine.toggle_sign(),
            Self::Percent => engine.percent(),
        }
    }
}

/// A single key on the pad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// What pressing the key does
    pub kind: ButtonKind,
    /// Grid columns occupied; the zero key spans two
    pub span: usize,
    /// Whether the key currently shows press feedback
    pub pressed: bool,
}

impl Button {
    /// Creates a single-column button
    #[must_use]
    pub const fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            span: 1,
            pressed: false,
        }
    }

    /// Creates a button spanning several grid columns
    #[must_use]
    pub const fn wide(kind: ButtonKind, span: usize) -> Self {
        Self {
            kind,
            span,
            pressed: false,
        }
    }
}

/// The pad layout
///
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 1 ] [ 2 ] [ 3 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 7 ] [ 8 ] [ 9 ] [ + ]
/// [   0     ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row order; spans within a row always total [`Self::COLS`]
    rows: Vec<Vec<Button>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Grid columns
    pub const COLS: usize = 4;

    /// Creates the standard pad
    #[must_use]
    pub fn new() -> Self {
        use ButtonKind::{Clear, Decimal, Digit, Equals, Percent, ToggleSign};

        let rows = vec![
            vec![
                Button::new(Clear),
                Button::new(ToggleSign),
                Button::new(Percent),
                Button::new(ButtonKind::Operator(Operator::Divide)),
            ],
            vec![
                Button::new(Digit(1)),
                Button::new(Digit(2)),
                Button::new(Digit(3)),
                Button::new(ButtonKind::Operator(Operator::Multiply)),
            ],
            vec![
                Button::new(Digit(4)),
                Button::new(Digit(5)),
                Button::new(Digit(6)),
                Button::new(ButtonKind::Operator(Operator::Subtract)),
            ],
            vec![
                Button::new(Digit(7)),
                Button::new(Digit(8)),
                Button::new(Digit(9)),
                Button::new(ButtonKind::Operator(Operator::Add)),
            ],
            vec![
                Button::wide(Digit(0), 2),
                Button::new(Decimal),
                Button::new(Equals),
            ],
        ];

        Self { rows }
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns the buttons of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Button]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns an iterator over all buttons in row order
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Returns an iterator over one row's buttons with their starting grid
    /// column, accounting for spans
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = (usize, &Button)> {
        let mut col = 0;
        self.rows
            .get(row)
            .into_iter()
            .flatten()
            .map(move |button| {
                let start = col;
                col += button.span;
                (start, button)
            })
    }

    /// Returns the button occupying a grid cell
    #[must_use]
    pub fn button_at_cell(&self, row: usize, col: usize) -> Option<&Button> {
        if col >= Self::COLS {
            return None;
        }
        self.row_cells(row)
            .find(|(start, button)| (*start..start + button.span).contains(&col))
            .map(|(_, button)| button)
    }

    /// Finds a button by the action it performs
    #[must_use]
    pub fn find(&self, kind: ButtonKind) -> Option<(usize, usize)> {
        (0..self.rows.len()).find_map(|row| {
            self.row_cells(row)
                .find(|(_, button)| button.kind == kind)
                .map(|(col, _)| (row, col))
        })
    }

    /// Sets press feedback on one button
    pub fn press(&mut self, kind: ButtonKind) {
        for button in self.rows.iter_mut().flatten() {
            if button.kind == kind {
                button.pressed = true;
            }
        }
    }

    /// Releases press feedback on every button
    pub fn release_all(&mut self) {
        for button in self.rows.iter_mut().flatten() {
            button.pressed = false;
        }
    }

    /// Moves press feedback to one button, releasing the rest
    pub fn highlight(&mut self, kind: ButtonKind) {
        self.release_all();
        self.press(kind);
    }

    /// Converts pad-relative coordinates to the button under them
    ///
    /// `width` and `height` are the pad interior size in terminal cells;
    /// `x` and `y` are relative to its top-left corner.
    #[must_use]
    pub fn hit_test(&self, width: u16, height: u16, x: u16, y: u16) -> Option<ButtonKind> {
        let cell_w = width / Self::COLS as u16;
        let cell_h = height / self.row_count() as u16;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        let col = (x / cell_w) as usize;
        let row = (y / cell_h) as usize;
        if col >= Self::COLS || row >= self.row_count() {
            return None;
        }
        self.button_at_cell(row, col).map(|button| button.kind)
    }
}
