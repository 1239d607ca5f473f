/// Display preferences persisted as one unit.
///
/// `auto_flip` is stored and restored but no behavior reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub auto_play: bool,
    pub auto_flip: bool,
    pub show_image: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_play: false,
            auto_flip: false,
            show_image: true,
        }
    }
}
