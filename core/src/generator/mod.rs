use crate::*;
pub use probing::*;

mod probing;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// A fixed layout generates itself, whatever the config says.
impl MinefieldGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> MineLayout {
        if self.game_config() != config {
            log::debug!(
                "Fixed layout {:?} overrides requested config {:?}",
                self.game_config(),
                config
            );
        }
        self
    }
}
