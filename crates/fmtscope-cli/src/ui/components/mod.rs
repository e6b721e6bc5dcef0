use ratatui::{layout::Rect, Frame};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod decisions;
pub(crate) mod doc;
pub(crate) mod input;
pub(crate) mod ops;

pub(crate) use decisions::DecisionsComponent;
pub(crate) use doc::DocComponent;
pub(crate) use input::InputComponent;
pub(crate) use ops::OpsComponent;
