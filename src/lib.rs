// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares against 0.0 / 1.0 and mixes f32 precision freely
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_precision_loss)]
// Pedantic allowances
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

//! First-person viewpoint controller for terrain-walking 3D environments.
//!
//! Strider converts per-frame input (keyboard, mouse) and a terrain height
//! query into an updated camera pose: world position, yaw/pitch, the derived
//! forward/right/up basis, and view/projection matrices — plus a
//! grounded/airborne vertical physics state with jumping.
//!
//! # Key entry points
//!
//! - [`player::PlayerController`] - the per-frame controller
//! - [`camera::Camera`] - pose, basis vectors, and transforms
//! - [`input::InputProcessor`] - raw events into per-frame
//!   [`input::InputSnapshot`] values
//! - [`terrain::HeightField`] - the external terrain seam
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame loop
//!
//! Everything runs on one thread: feed raw events into the processor as
//! they arrive, then once per frame take a snapshot and advance the
//! controller. Renderers on another thread should copy a
//! [`camera::CameraUniform`] rather than hold a reference to the pose.
//!
//! ```
//! use glam::Vec2;
//! use strider::input::{InputEvent, InputProcessor};
//! use strider::options::Options;
//! use strider::player::PlayerController;
//! use strider::util::frame_timing::FrameTiming;
//!
//! # fn main() -> Result<(), strider::StriderError> {
//! let options = Options::default();
//! let terrain = |x: f32, z: f32| (x * 0.1).sin() + (z * 0.1).cos();
//! let mut player =
//!     PlayerController::new(&options, &terrain, Vec2::ZERO, -90.0, 0.0)?;
//! let mut input = InputProcessor::new();
//! let mut timing = FrameTiming::new(0);
//!
//! // Per frame: feed raw events, then advance the controller once.
//! let _ = input.handle_event(&InputEvent::Key {
//!     code: "KeyW".into(),
//!     pressed: true,
//! });
//! let dt = timing.begin_frame();
//! player.update(dt, &input.take_snapshot(), &terrain)?;
//! let view_proj = player.camera().view_projection();
//! # let _ = view_proj;
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod player;
pub mod terrain;
pub mod util;

pub use error::StriderError;
