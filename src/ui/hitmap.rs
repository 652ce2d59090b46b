use ratatui::layout::{Position, Rect};

use crate::playlist::RowBinding;

/// What a screen region does when clicked.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Row(RowBinding),
    Card(String),
    SeekBar,
    VolumeIcon,
    VolumeBar,
    Previous,
    PlayPause,
    Next,
    Hamburger,
    ClosePanel,
    SearchBox,
}

/// A resolved click: the target plus, for bars, the horizontal fraction hit.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
    Row(RowBinding),
    Card(String),
    SeekBar(f64),
    VolumeIcon,
    VolumeBar(f32),
    Previous,
    PlayPause,
    Next,
    Hamburger,
    ClosePanel,
    SearchBox,
}

/// Clickable regions of the last drawn frame.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

/// Horizontal position of `column` inside `area`, 0.0 at the left edge.
pub fn fraction_in(area: Rect, column: u16) -> f64 {
    if area.width == 0 {
        return 0.0;
    }
    (column.saturating_sub(area.x) as f64 / area.width as f64).clamp(0.0, 1.0)
}

/// Slider value under `column`: 0.0 at the left edge, 1.0 at the right edge.
pub fn slider_value(area: Rect, column: u16) -> f32 {
    if area.width <= 1 {
        return 1.0;
    }
    (column.saturating_sub(area.x) as f32 / (area.width - 1) as f32).clamp(0.0, 1.0)
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    #[cfg(test)]
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.regions.iter().map(|(_, t)| t)
    }

    #[cfg(test)]
    pub fn area_of(&self, target: &Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }

    /// The topmost region under the pointer. Later pushes draw over earlier ones.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        let (area, target) = self.regions.iter().rev().find(|(a, _)| a.contains(pos))?;
        Some(match target {
            Target::Row(b) => Hit::Row(*b),
            Target::Card(name) => Hit::Card(name.clone()),
            Target::SeekBar => Hit::SeekBar(fraction_in(*area, column)),
            Target::VolumeIcon => Hit::VolumeIcon,
            Target::VolumeBar => Hit::VolumeBar(slider_value(*area, column)),
            Target::Previous => Hit::Previous,
            Target::PlayPause => Hit::PlayPause,
            Target::Next => Hit::Next,
            Target::Hamburger => Hit::Hamburger,
            Target::ClosePanel => Hit::ClosePanel,
            Target::SearchBox => Hit::SearchBox,
        })
    }

    /// Whether the pointer rests on the volume icon or its slider.
    pub fn is_over_volume(&self, column: u16, row: u16) -> bool {
        matches!(
            self.hit(column, row),
            Some(Hit::VolumeIcon | Hit::VolumeBar(_))
        )
    }
}
