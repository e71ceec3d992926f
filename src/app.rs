use std::io::BufRead;
use std::str::FromStr;
use std::time::{Duration, Instant};

use calloop::channel::{channel, Channel, Event as ChannelEvent, Sender};
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};
use thiserror::Error;

use crate::island::{Island, IslandConfig};
use crate::reactive::{take_frame_request, ChangeFlags};
use crate::scene::Scene;
use crate::view::{ParseViewError, View};

#[derive(Error, Debug)]
pub enum IslandError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] calloop::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error(transparent)]
    View(#[from] ParseViewError),
    #[error("click expects two coordinates, got {0:?}")]
    Click(String),
}

/// Input accepted by a running [`IslandApp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Select(View),
    Click { x: f32, y: f32 },
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses `idle`/`ring`/`timer`, `click <x> <y>` and `q`/`quit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(Command::Quit);
        }
        let click = line
            .strip_prefix("click")
            .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace));
        if let Some(coords) = click {
            let parsed: Vec<f32> = coords
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map_err(|_| CommandError::Click(coords.trim().to_string()))?;
            return match parsed[..] {
                [x, y] => Ok(Command::Click { x, y }),
                _ => Err(CommandError::Click(coords.trim().to_string())),
            };
        }
        Ok(Command::Select(line.parse()?))
    }
}

pub struct AppConfig {
    /// Time between animation frames
    pub frame_interval: Duration,
    pub island: IslandConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            island: IslandConfig::default(),
        }
    }
}

/// A callback that gets called after each frame that changed something.
pub type FrameCallback = Box<dyn FnMut(&Scene, ChangeFlags)>;

/// Runs an [`Island`] on an event loop fed by line-based commands.
pub struct IslandApp {
    config: AppConfig,
    on_frame: Option<FrameCallback>,
}

struct LoopState {
    island: Island,
    signal: LoopSignal,
    last_frame: Instant,
    on_frame: Option<FrameCallback>,
}

impl LoopState {
    fn handle(&mut self, command: Command) {
        match command {
            Command::Select(view) => self.island.select_view(view),
            Command::Click { x, y } => {
                if self.island.click(x, y).is_none() {
                    log::debug!("click at ({x}, {y}) hit no button");
                }
            }
            Command::Quit => {
                log::info!("quit requested");
                self.signal.stop();
            }
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        let mut flags = self.island.tick(dt);
        if take_frame_request() {
            flags |= ChangeFlags::NEEDS_PAINT;
        }
        if flags.is_empty() {
            return;
        }

        let scene = self.island.scene();
        log::trace!("{scene}");
        if let Some(ref mut callback) = self.on_frame {
            callback(&scene, flags);
        }
    }
}

impl IslandApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            on_frame: None,
        }
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self
    }

    pub fn canvas_width(mut self, width: f32) -> Self {
        self.config.island.canvas_width = width;
        self
    }

    /// Perceived duration of every spring
    pub fn visual_duration(mut self, duration: Duration) -> Self {
        self.config.island.timing.visual_duration = duration;
        self
    }

    /// Narrowest the shell gets, even around empty content
    pub fn min_width(mut self, width: f32) -> Self {
        self.config.island.min_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.config.island.corner_radius = radius;
        self
    }

    pub fn exit_fade(mut self, duration: Duration) -> Self {
        self.config.island.timing.exit_fade = duration;
        self
    }

    /// Set a callback that gets called after each frame that changed the scene.
    pub fn on_frame<F: FnMut(&Scene, ChangeFlags) + 'static>(mut self, callback: F) -> Self {
        self.on_frame = Some(Box::new(callback));
        self
    }

    /// Run with commands read line by line from stdin until `quit` or EOF.
    pub fn run(self) -> Result<(), IslandError> {
        let _ = env_logger::try_init();

        let (sender, commands) = channel();
        spawn_stdin_reader(sender)?;
        self.run_with(commands)
    }

    /// Run with commands from `commands` until `Quit` or every sender is dropped.
    pub fn run_with(self, commands: Channel<Command>) -> Result<(), IslandError> {
        let mut event_loop: EventLoop<LoopState> = EventLoop::try_new()?;
        let handle = event_loop.handle();
        let interval = self.config.frame_interval;

        handle
            .insert_source(commands, |event, _, state| match event {
                ChannelEvent::Msg(command) => state.handle(command),
                ChannelEvent::Closed => {
                    log::info!("command source closed");
                    state.signal.stop();
                }
            })
            .map_err(|e| e.error)?;

        handle
            .insert_source(Timer::from_duration(interval), move |_, _, state| {
                state.frame();
                TimeoutAction::ToDuration(interval)
            })
            .map_err(|e| e.error)?;

        let mut state = LoopState {
            island: Island::new(self.config.island),
            signal: event_loop.get_signal(),
            last_frame: Instant::now(),
            on_frame: self.on_frame,
        };

        log::info!(
            "island running, frame interval {}ms",
            interval.as_millis()
        );
        event_loop.run(interval, &mut state, |_| {})?;
        log::info!("island stopped on {}", state.island.controller().view());
        Ok(())
    }
}

impl Default for IslandApp {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_stdin_reader(sender: Sender<Command>) -> Result<(), IslandError> {
    std::thread::Builder::new()
        .name("island-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if sender.send(command).is_err() {
                            break;
                        }
                    }
                    Err(err) => log::warn!("{err}"),
                }
            }
        })?;
    Ok(())
}
