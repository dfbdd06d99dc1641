//! Text shown over the playfield: lives, score and the centered banner.

pub const LAUNCH_PROMPT: &str = "Press Space to start";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    lives: String,
    score: String,
    banner: Option<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_lives(&mut self, lives: u8) {
        self.lives = format!("Lives: {lives}");
    }

    pub fn update_score(&mut self, score: u32) {
        self.score = format!("Score: {score}");
    }

    pub fn show_banner(&mut self, text: impl Into<String>) {
        self.banner = Some(text.into());
    }

    pub fn hide_banner(&mut self) {
        self.banner = None;
    }

    pub fn lives(&self) -> &str {
        &self.lives
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_with_same_values_is_stable() {
        let mut hud = Hud::new();
        hud.update_lives(2);
        hud.update_score(15);
        let first = hud.clone();
        hud.update_lives(2);
        hud.update_score(15);
        assert_eq!(hud, first);
        assert_eq!(hud.lives(), "Lives: 2");
        assert_eq!(hud.score(), "Score: 15");
    }

    #[test]
    fn banner_toggles() {
        let mut hud = Hud::new();
        assert_eq!(hud.banner(), None);
        hud.show_banner(LAUNCH_PROMPT);
        assert_eq!(hud.banner(), Some(LAUNCH_PROMPT));
        hud.hide_banner();
        assert_eq!(hud.banner(), None);
    }
}
