use super::*;
use crate::ui;
use enchant_core::{HorizontalGravity, Interpolator};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::Terminal;

fn config_with(words: &[&str], steps: u32) -> Config {
    let mut config = Config::default();
    config.ui.words = words.iter().map(|w| w.to_string()).collect();
    config.playback.animation_steps = steps;
    config
}

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|f| ui::draw(f, app)).unwrap();
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

fn finish(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    for _ in 0..=app.view.animation_steps() {
        render(terminal, app);
    }
    // Settle the relayout requested by the last step
    render(terminal, app);
    assert!(!app.view.is_animating());
}

#[test]
fn test_first_word_animates_in() {
    let mut app = App::new(&config_with(&["hello", "world"], 4)).unwrap();
    assert_eq!(app.current_word(), "hello");
    assert!(!app.view.is_animating());
    assert!(app.host.needs_layout());

    let mut terminal = terminal(30, 6);
    render(&mut terminal, &mut app);
    assert_eq!(app.view.text(), "hello");
    assert_eq!(app.view.progress(), Some((1, 4)));
    assert!(app.host.frame_pending());
    assert!(!app.host.needs_layout());
}

#[test]
fn test_empty_word_list_falls_back_to_months() {
    let mut config = Config::default();
    config.ui.words.clear();
    let app = App::new(&config).unwrap();
    assert_eq!(app.words.len(), 12);
    assert_eq!(app.current_word(), "January");
}

#[test]
fn test_invalid_steps_fail_fast() {
    let result = App::new(&config_with(&["a"], 1));
    assert!(matches!(result, Err(ConfigError::InvalidAnimationSteps(1))));
}

#[test]
fn test_word_navigation_wraps() {
    let mut app = App::new(&config_with(&["one", "two", "three"], 2)).unwrap();
    app.prev_word();
    assert_eq!(app.current_word(), "three");
    app.next_word();
    assert_eq!(app.current_word(), "one");
    app.next_word();
    assert_eq!(app.current_word(), "two");
    app.goto_word(7);
    assert_eq!(app.current_word(), "two");
    app.goto_word(2);
    assert_eq!(app.current_word(), "three");
}

#[test]
fn test_each_step_drawn_once() {
    let mut app = App::new(&config_with(&["abc"], 3)).unwrap();
    let mut terminal = terminal(30, 6);

    render(&mut terminal, &mut app);
    assert_eq!(app.view.progress(), Some((1, 3)));
    render(&mut terminal, &mut app);
    assert_eq!(app.view.progress(), Some((2, 3)));
    render(&mut terminal, &mut app);
    assert_eq!(app.view.progress(), None);

    // Idle redraws keep the resting frame
    let resting = app.glyphs.clone();
    render(&mut terminal, &mut app);
    render(&mut terminal, &mut app);
    assert_eq!(app.glyphs, resting);
}

#[test]
fn test_renders_word_in_box() {
    let mut app = App::new(&config_with(&["January"], 2)).unwrap();
    let mut terminal = terminal(30, 6);
    finish(&mut terminal, &mut app);

    let rows = rows(terminal.backend().buffer());
    assert!(rows.iter().any(|r| r.contains("│ January │")), "{rows:#?}");
    assert!(rows[5].contains("1/1"));
}

#[test]
fn test_box_grows_then_shrinks() {
    let mut app = App::new(&config_with(&["September", "October"], 2)).unwrap();
    let mut terminal = terminal(40, 6);
    finish(&mut terminal, &mut app);
    // 9 glyphs plus one cell of padding on each side
    assert_eq!(app.size.width, 11.0);

    app.next_word();
    render(&mut terminal, &mut app);
    assert!(app.view.is_animating());
    assert_eq!(app.size.width, 11.0);

    finish(&mut terminal, &mut app);
    assert_eq!(app.size.width, 9.0);
}

#[test]
fn test_fill_width_uses_available_space() {
    let mut config = config_with(&["May"], 2);
    config.ui.fill_width = true;
    let mut app = App::new(&config).unwrap();
    let mut terminal = terminal(40, 6);
    finish(&mut terminal, &mut app);
    assert_eq!(app.size.width, 38.0);

    app.toggle_fill();
    render(&mut terminal, &mut app);
    assert_eq!(app.size.width, 5.0);
}

#[test]
fn test_gravity_moves_resting_text() {
    let mut config = config_with(&["May"], 2);
    config.ui.fill_width = true;
    config.ui.padding = 0;
    let mut app = App::new(&config).unwrap();
    let mut terminal = terminal(22, 5);
    finish(&mut terminal, &mut app);
    assert_eq!(app.glyphs[0].x, 0.0);

    app.cycle_gravity();
    assert_eq!(app.view.gravity().horizontal, HorizontalGravity::CenterHorizontal);
    render(&mut terminal, &mut app);
    // 20 wide, 3 glyphs
    assert_eq!(app.glyphs[0].x, 8.5);

    app.cycle_gravity();
    render(&mut terminal, &mut app);
    assert_eq!(app.glyphs[0].x, 17.0);
}

#[test]
fn test_fade_blends_over_background() {
    let mut config = config_with(&["J"], 2);
    config.text.fade_in = true;
    let mut app = App::new(&config).unwrap();
    let mut terminal = terminal(20, 5);

    // Step 1 of 2: glyph at half alpha, black over white
    render(&mut terminal, &mut app);
    let cell = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .find(|cell| cell.symbol() == "J")
        .expect("glyph rendered");
    assert_eq!(cell.fg, Color::Rgb(127, 127, 127));
    assert_eq!(cell.bg, Color::Rgb(255, 255, 255));
}

#[test]
fn test_playback_controls() {
    let mut app = App::new(&config_with(&["a", "b"], 50)).unwrap();

    app.increase_steps();
    assert_eq!(app.view.animation_steps(), 55);
    for _ in 0..20 {
        app.decrease_steps();
    }
    assert_eq!(app.view.animation_steps(), 2);

    assert!(!app.view.fade_in());
    app.toggle_fade();
    assert!(app.view.fade_in());

    assert_eq!(app.view.interpolator(), Interpolator::Linear);
    app.cycle_interpolator();
    assert_eq!(app.view.interpolator(), Interpolator::Accelerate);

    app.toggle_help();
    assert!(app.show_help);
}

#[test]
fn test_autoplay_advances_words() {
    let mut config = config_with(&["a", "b", "c"], 2);
    config.playback.speed = 0;
    let mut app = App::new(&config).unwrap();

    app.tick();
    assert_eq!(app.index, 0);

    app.toggle_autoplay();
    app.tick();
    assert_eq!(app.index, 1);
    app.tick();
    assert_eq!(app.index, 2);
}

#[test]
fn test_help_popover_renders() {
    let mut app = App::new(&config_with(&["a"], 2)).unwrap();
    let mut terminal = terminal(60, 20);
    app.toggle_help();
    render(&mut terminal, &mut app);
    let rows = rows(terminal.backend().buffer());
    assert!(rows.iter().any(|r| r.contains("Cycle interpolator")));
}
