use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use history_trivia::{
    AudioSession, Backdrop, CONFIG_FILE, Flow, OpenTdbClient, QuizController, QuizError,
    QuestionSource, TuiSurface, UserAction, input, load_config, logger,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

type Controller<Q> = QuizController<Q, TuiSurface<CrosstermBackend<Stdout>>, AudioSession, StdRng>;

fn run<Q: QuestionSource>(controller: &mut Controller<Q>) -> Result<(), QuizError> {
    controller.start()?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = controller.surface_mut().translate_key(key)? else {
                    continue;
                };
                let fetched = matches!(action, UserAction::DifficultyChosen(_));
                if controller.handle(action)? == Flow::Exit {
                    return Ok(());
                }
                if fetched {
                    input::drain_pending(|| event::poll(Duration::ZERO), event::read)?;
                }
            }
            Event::Resize(_, _) => controller.surface_mut().redraw()?,
            _ => {}
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn main() -> Result<(), QuizError> {
    logger::init();
    let config = load_config(Path::new(CONFIG_FILE));
    let source = OpenTdbClient::new(&config)?;
    let audio = AudioSession::open(&config);
    let backdrop = Backdrop::load(&config.asset_path(&config.backdrop));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut controller = QuizController::new(
        source,
        TuiSurface::new(terminal, backdrop),
        audio,
        StdRng::from_entropy(),
        &config,
    );

    let result = run(&mut controller);
    restore_terminal(controller.surface_mut().terminal_mut())?;

    if let Some(message) = controller.failure() {
        eprintln!("Error: Failed to fetch trivia questions: {}", message);
    }
    let failed = controller.failure().is_some();
    drop(controller);

    result?;
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
