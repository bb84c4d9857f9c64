mod home;
mod leaderboard;
mod quiz;
mod results;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, GameState};
use crate::store::Store;

pub fn render<S: Store>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        GameState::Home => home::render(frame, area, app),
        GameState::Quiz => quiz::render(frame, area, app),
        GameState::Results => results::render(frame, area, app),
        GameState::Leaderboard => leaderboard::render(frame, area, app),
    }
}
