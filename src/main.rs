mod app;
mod form;
mod model;
mod services;
mod theme;
mod ui;
mod widgets;

use anyhow::Result;

fn main() -> Result<()> {
    ui::run()
}
