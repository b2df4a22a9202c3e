//! # Signout (Logout Teardown Coordinator)
//!
//! `signout` runs the teardown sequence when a user signs out of an
//! application that ships both a web and a desktop-hosted variant. It owns no
//! session state itself; it issues single-shot teardown commands to a set of
//! subsystem collaborators in a fixed order and isolates each step's failure
//! so one subsystem's error cannot prevent the others from running.
//!
//! ## Guarantees
//!
//! - **`perform_logout` never fails.** The operation returns `()`, every
//!   step failure is logged and discarded, and the whole sequence runs behind
//!   a task boundary so even a panic inside it is contained. Callers rely on
//!   this to keep their own post-logout logic (UI transitions, navigation)
//!   free of error handling.
//! - **Fixed step order.** Workers are terminated first, before any step
//!   clears persistent storage a worker could still be reading or writing.
//!   Then remote session invalidation, then the local subsystem teardowns,
//!   then the desktop-only block when a desktop host is present.
//! - **Strictly sequential.** Each step is fully awaited before the next
//!   begins; steps never run concurrently, and a logout in progress cannot
//!   be cancelled.
//!
//! ## Desktop hosts
//!
//! The desktop-only steps (ML teardown, continuous-export disable, host
//! bridge logout) run only when [`DesktopSubsystems`] is supplied to the
//! coordinator. There is no global capability flag; absence of the value
//! skips the block entirely.

pub mod coordinator;
pub mod diagnostics;
pub mod subsystems;

pub use coordinator::LogoutCoordinator;
pub use subsystems::DesktopSubsystems;
