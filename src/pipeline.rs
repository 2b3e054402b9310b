//! The one-robot visualization pipeline: argument declarations, derived
//! values, and candidate process specs.
//!
//! Resolution is a single forward pass: arguments resolve first, derived
//! values compute next (including the templating invocation for the robot
//! model), conditions are validated and evaluated last, and the surviving
//! candidates become the final ordered batch.

use crate::argument::Argument;
use crate::command::run_captured;
use crate::condition::Condition;
use crate::context::ResolveContext;
use crate::derived::{self, DerivedValue};
use crate::error::{ConfigurationError, DerivedValueError, Result};
use crate::package::find_package_share;
use crate::spec::ProcessSpec;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Package providing the robot model and the per-color viewer presets.
pub const DESCRIPTION_PACKAGE: &str = "nuturtle_description";

const URDF_TEMPLATE: &str = "urdf/turtlebot3_burger.urdf.xacro";
const RVIZ_PRESET_PREFIX: &str = "config/basic_";
const RVIZ_PRESET_SUFFIX: &str = ".rviz";

const COLORS: &[&str] = &[
    "red", "green", "blue", "purple", "cyan", "magenta", "yellow", "",
];

/// Which joint-state source, if any, feeds the state publisher. A single
/// tagged choice: at most one joint-state process can ever be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointStateSource {
    Gui,
    Jsp,
    None,
}

impl JointStateSource {
    pub fn as_str(self) -> &'static str {
        match self {
            JointStateSource::Gui => "gui",
            JointStateSource::Jsp => "jsp",
            JointStateSource::None => "none",
        }
    }

    /// Inclusion condition for the joint-state candidate driven by this
    /// variant.
    fn condition(self) -> Condition {
        Condition::equals("use_jsp", self.as_str())
    }
}

impl FromStr for JointStateSource {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gui" => Ok(JointStateSource::Gui),
            "jsp" => Ok(JointStateSource::Jsp),
            "none" => Ok(JointStateSource::None),
            other => Err(ConfigurationError::ValueOutsideChoices {
                name: "use_jsp".to_string(),
                value: other.to_string(),
                choices: vec!["gui".to_string(), "jsp".to_string(), "none".to_string()],
            }),
        }
    }
}

/// What the resolver needs from its environment: where the description
/// package lives and which templating program expands the robot model.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Share directory of [`DESCRIPTION_PACKAGE`]. `None` means look it up
    /// via the installed-package index.
    pub share_dir: Option<PathBuf>,
    /// Templating program invoked as `<program> <template> color:=<color>`.
    pub templating_program: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            share_dir: None,
            templating_program: "xacro".to_string(),
        }
    }
}

/// A candidate process paired with its inclusion condition. The full list is
/// always declared; a single filter pass produces the final batch, which
/// keeps the output order deterministic.
struct Candidate {
    condition: Condition,
    spec: ProcessSpec,
}

fn declare_arguments(context: &mut ResolveContext) -> Result<()> {
    context.declare(Argument::with_choices(
        "use_jsp",
        "gui",
        &["gui", "jsp", "none"],
        "gui: use jsp_gui, jsp: use joint_state_publisher, none: no joint states published",
    ))?;
    context.declare(Argument::with_choices(
        "use_rviz",
        "true",
        &["true", "false"],
        "true (default): start rviz, otherwise don't start rviz",
    ))?;
    context.declare(Argument::with_choices(
        "color",
        "purple",
        COLORS,
        "Color of nuturtle's body",
    ))?;
    Ok(())
}

fn derived_values(share_dir: &Path, options: &ResolveOptions) -> Vec<DerivedValue> {
    let template = share_dir.join(URDF_TEMPLATE).display().to_string();
    let program = options.templating_program.clone();

    vec![
        DerivedValue::new("rviz_color", |ctx| {
            let color = ctx.require("color")?;
            Ok(format!(
                "{}{}{}",
                RVIZ_PRESET_PREFIX, color, RVIZ_PRESET_SUFFIX
            ))
        }),
        DerivedValue::new("robot_description", move |ctx| {
            let color = ctx.require("color")?;
            log::info!("Expanding robot model template: {}", template);
            let substitution = format!("color:={}", color);
            let expanded = run_captured(&program, [template.as_str(), substitution.as_str()])?;
            Ok(expanded)
        }),
    ]
}

/// The four candidates in declaration order: joint-state GUI, joint-state
/// plain, robot-state publisher (unconditional), viewer. Every process runs
/// under the color namespace.
fn candidates(context: &ResolveContext, share_dir: &Path) -> Result<Vec<Candidate>> {
    let namespace = context.require("color")?.to_string();
    let frame_prefix = format!("{}/", namespace);
    let rviz_preset = context.require("rviz_color")?.to_string();
    let robot_description = context.require("robot_description")?.to_string();

    Ok(vec![
        Candidate {
            condition: JointStateSource::Gui.condition(),
            spec: ProcessSpec::new(
                "joint_state_publisher_gui",
                "joint_state_publisher_gui",
                &namespace,
            ),
        },
        Candidate {
            condition: JointStateSource::Jsp.condition(),
            spec: ProcessSpec::new("joint_state_publisher", "joint_state_publisher", &namespace),
        },
        Candidate {
            condition: Condition::Always,
            spec: ProcessSpec::new("robot_state_publisher", "robot_state_publisher", &namespace)
                .with_parameters(vec![
                    ("frame_prefix".to_string(), frame_prefix),
                    ("robot_description".to_string(), robot_description),
                ]),
        },
        Candidate {
            condition: Condition::equals("use_rviz", "true"),
            spec: ProcessSpec::new("rviz2", "rviz2", &namespace).with_arguments(vec![
                "-d".to_string(),
                rviz_preset.clone(),
                share_dir.join(&rviz_preset).display().to_string(),
            ]),
        },
    ])
}

/// Resolve the pipeline into its ordered batch of process specs. Any error
/// aborts the pass with zero specs; partial pipelines are never emitted.
pub fn resolve(
    overrides: &HashMap<String, String>,
    options: &ResolveOptions,
) -> Result<Vec<ProcessSpec>> {
    let mut context = ResolveContext::new();
    declare_arguments(&mut context)?;

    for (name, value) in overrides {
        context.set_override(name.clone(), value.clone());
    }
    context.resolve_arguments()?;

    let share_dir = match &options.share_dir {
        Some(dir) => dir.clone(),
        None => find_package_share(DESCRIPTION_PACKAGE)
            .ok_or_else(|| DerivedValueError::PackageNotFound(DESCRIPTION_PACKAGE.to_string()))?,
    };

    derived::compute_all(&derived_values(&share_dir, options), &mut context)?;

    // Parse the tagged choice once; validated against the closed variant set.
    let source: JointStateSource = context.require("use_jsp")?.parse()?;
    log::debug!("Joint-state source: {:?}", source);

    let candidates = candidates(&context, &share_dir)?;
    for candidate in &candidates {
        candidate.condition.validate(&context)?;
    }

    let specs: Vec<ProcessSpec> = candidates
        .into_iter()
        .filter(|candidate| {
            let included = candidate.condition.evaluate(&context);
            if !included {
                log::debug!("Skipping {}: condition not met", candidate.spec.executable);
            }
            included
        })
        .map(|candidate| candidate.spec)
        .collect();

    log::info!("Resolved {} process specs", specs.len());
    Ok(specs)
}
