//! Script a sheet: expand, then one press/move/release per drag.

use std::error::Error;
use std::fmt::{self, Write as _};

use tripsheet_graphics::EdgeInsets;
use tripsheet_sheet::{SheetConfig, SheetError, SheetHeight, SheetPhase, SheetState};
use tripsheet_testing::{FrameSample, SheetRobot};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulateOptions {
    pub height: f32,
    pub inset: f32,
    pub drags: Vec<f32>,
    pub threshold: Option<f32>,
    pub fling_velocity: Option<f32>,
    pub fps: u32,
    /// Print every n-th frame in addition to phase changes; 0 prints phase
    /// changes only.
    pub every: usize,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            height: 700.0,
            inset: 0.0,
            drags: Vec::new(),
            threshold: None,
            fling_velocity: None,
            fps: 60,
            every: 0,
        }
    }
}

#[derive(Debug)]
pub enum SimulateError {
    Geometry(SheetError),
    /// The sheet was still moving when the robot's frame budget ran out.
    Unsettled { step: String, state: SheetState },
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulateError::Geometry(err) => write!(f, "{err}"),
            SimulateError::Unsettled { step, state } => write!(
                f,
                "{step}: sheet still animating at offset {:.1}",
                state.offset
            ),
        }
    }
}

impl Error for SimulateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulateError::Geometry(err) => Some(err),
            SimulateError::Unsettled { .. } => None,
        }
    }
}

impl From<SheetError> for SimulateError {
    fn from(err: SheetError) -> Self {
        SimulateError::Geometry(err)
    }
}

/// One scripted action and the frames it produced.
#[derive(Debug, Clone)]
pub struct Step {
    pub label: String,
    pub frames: Vec<FrameSample>,
    pub phase: SheetPhase,
    pub state: SheetState,
}

pub fn run(options: &SimulateOptions) -> Result<Vec<Step>, SimulateError> {
    let mut config = SheetConfig::default()
        .with_height(SheetHeight::Measured {
            initial: options.height,
        })
        .with_safe_area(EdgeInsets::bottom_only(options.inset));
    if let Some(threshold) = options.threshold {
        config = config.with_release_threshold(threshold);
    }
    if let Some(velocity) = options.fling_velocity {
        config = config.with_fling_velocity_threshold(velocity);
    }

    let mut robot = SheetRobot::new(config).with_fps(options.fps);
    robot.sheet().on_layout(options.height)?;
    robot.sheet().set_safe_area_insets(EdgeInsets::bottom_only(options.inset))?;
    log::info!(
        "sheet ready: OPEN = {}, CLOSE = {}",
        robot.sheet().open_offset(),
        robot.sheet().close_offset()
    );

    let mut steps = Vec::with_capacity(options.drags.len() + 1);
    robot.sheet().expand();
    steps.push(finish_step(&mut robot, "expand".to_owned())?);

    for &dy in &options.drags {
        if !matches!(robot.sheet().phase(), SheetPhase::Open) {
            robot.sheet().expand();
            steps.push(finish_step(&mut robot, "expand".to_owned())?);
        }
        robot.drag_by(dy);
        steps.push(finish_step(&mut robot, format!("drag {dy:+}"))?);
    }
    Ok(steps)
}

fn finish_step(robot: &mut SheetRobot, label: String) -> Result<Step, SimulateError> {
    if robot.try_settle().is_none() {
        return Err(SimulateError::Unsettled {
            step: label,
            state: robot.sheet().state(),
        });
    }
    Ok(Step {
        label,
        frames: robot.take_timeline(),
        phase: robot.sheet().phase(),
        state: robot.sheet().state(),
    })
}

/// Render steps as a plain-text timeline.
pub fn render(steps: &[Step], every: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>8}  {:<9} {:>8} {:>8}",
        "step", "frame", "ms", "phase", "offset", "backdrop"
    );
    for step in steps {
        let mut previous_phase = None;
        for (index, frame) in step.frames.iter().enumerate() {
            let phase_changed = previous_phase != Some(frame.phase);
            let sampled = every > 0 && index % every == 0;
            previous_phase = Some(frame.phase);
            if phase_changed || sampled {
                let _ = writeln!(
                    out,
                    "{:<12} {:>6} {:>8.1}  {:<9} {:>8.1} {:>8.2}",
                    step.label,
                    index + 1,
                    frame.frame_nanos as f64 / 1_000_000.0,
                    format!("{:?}", frame.phase),
                    frame.state.offset,
                    frame.backdrop_opacity
                );
            }
        }
        let _ = writeln!(
            out,
            "{:<12} settled {:?} at {:.1} after {} frames",
            step.label,
            step.phase,
            step.state.offset,
            step.frames.len()
        );
    }
    out
}
