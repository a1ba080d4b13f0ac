//! Model behind the two-option slide button.

/// Which of the two buttons.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    Left,
    Right,
}

/// Rendered widths of the two buttons, in CSS pixels.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct ButtonWidths {
    pub left: f64,
    pub right: f64,
}

/// Geometry of the sliding highlight behind the selected button.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Indicator {
    pub offset: f64,
    pub width: f64,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Toggle {
    label_left: String,
    label_right: String,
    selected: String,
    widths: ButtonWidths,
}

impl Toggle {
    pub fn new(label_left: &str, label_right: &str, selected: &str) -> Self {
        Self {
            label_left: label_left.to_string(),
            label_right: label_right.to_string(),
            selected: selected.to_string(),
            widths: ButtonWidths::default(),
        }
    }

    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.label_left,
            Side::Right => &self.label_right,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// The side whose label is selected, if any.
    pub fn selected_side(&self) -> Option<Side> {
        if self.selected == self.label_left {
            Some(Side::Left)
        } else if self.selected == self.label_right {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Select a side and return the label to emit to the owner.
    pub fn select(&mut self, side: Side) -> String {
        self.selected = self.label(side).to_string();
        self.selected.clone()
    }

    /// Take a selection pushed in by the owner. Nothing is emitted.
    pub fn set_selected(&mut self, label: &str) {
        if self.selected != label {
            self.selected = label.to_string();
        }
    }

    /// Cache a measured button width.
    pub fn measure(&mut self, side: Side, width: f64) {
        match side {
            Side::Left => self.widths.left = width,
            Side::Right => self.widths.right = width,
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self.selected_side() {
            Some(Side::Left) => Indicator {
                offset: 0.0,
                width: self.widths.left,
            },
            Some(Side::Right) => Indicator {
                offset: self.widths.left,
                width: self.widths.right,
            },
            None => Indicator::default(),
        }
    }
}
