//! Metadata extraction orchestration.
//!
//! [`Inspector`] runs one extraction attempt: probe the bytes, delegate
//! structural parsing to the library, and assemble the report.
//! [`InspectSession`] owns the observable state across attempts — the
//! password [`RetryState`], the finished report, and the current
//! [`Phase`] — and hands out an [`AttemptId`] per attempt so that a
//! superseded attempt's completion is ignored instead of overwriting
//! newer state.

pub mod report;

pub use report::{InfoDictionary, InspectionReport, build_report};

use log::debug;
use std::path::Path;

use crate::config::LoadOptions;
use crate::error::{PdfMetaError, Result};
use crate::io::{DocumentLoader, FileSample};
use crate::probe::FileProbe;
use crate::prompt::PasswordPrompt;

/// Message shown when a submitted password fails to decrypt.
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password. Please try again.";

/// Outcome of a single extraction attempt.
#[derive(Debug)]
pub enum Attempt {
    /// The document parsed; the report is ready for presentation.
    Complete(InspectionReport),
    /// A password is needed before the document can be parsed.
    NeedsPassword {
        /// True when a supplied password was rejected (a retry), false
        /// for the first prompt.
        invalid: bool,
    },
}

/// Lifecycle phase of the current inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No inspection in progress.
    #[default]
    Idle,
    /// Reading the input file.
    Reading,
    /// Waiting for a password from the user.
    AwaitingPassword,
    /// Delegating to the parsing library.
    Parsing,
    /// A report is available.
    Done,
    /// The attempt ended with a terminal error.
    Failed,
}

/// Runs extraction attempts against the parsing library.
#[derive(Debug, Clone)]
pub struct Inspector {
    loader: DocumentLoader,
}

impl Inspector {
    /// Create an inspector from explicit load options.
    ///
    /// Everything that configures the parse (currently the timeout) is
    /// passed in here once, at construction, rather than read from
    /// process-wide state.
    pub fn new(options: &LoadOptions) -> Self {
        Self {
            loader: DocumentLoader::new(options.timeout),
        }
    }

    /// Run one extraction attempt over an in-memory sample.
    ///
    /// When the byte probe reports encryption and no password is
    /// available, this returns [`Attempt::NeedsPassword`] without
    /// touching the library. A library-level password failure is folded
    /// into the same outcome, so a heuristic false negative still lands
    /// in the prompt flow. Any other library failure is terminal.
    pub async fn inspect(&self, sample: &FileSample, password: Option<&str>) -> Result<Attempt> {
        let probe = FileProbe::scan(&sample.bytes);
        debug!(
            "probed {}: pdf={} version={:?} encrypted={} tagged={}",
            sample.name, probe.is_pdf, probe.version, probe.encrypted, probe.tagged
        );

        if probe.encrypted && password.is_none() {
            return Ok(Attempt::NeedsPassword { invalid: false });
        }

        let loaded = self
            .loader
            .load(sample.bytes.clone(), password.map(str::to_string))
            .await;

        match loaded {
            Ok(loaded) => Ok(Attempt::Complete(build_report(sample, &probe, &loaded))),
            Err(err) if err.is_recoverable() => Ok(Attempt::NeedsPassword {
                invalid: password.is_some(),
            }),
            Err(err) => Err(err),
        }
    }
}

/// Identity token for one extraction attempt.
///
/// Issued by [`InspectSession::begin`]; session transitions carrying a
/// stale token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

/// Password-retry bookkeeping for the attempt in flight.
///
/// `pending` is set exactly while the prompt is visible; everything is
/// cleared together on cancel or success.
#[derive(Debug, Default)]
pub struct RetryState {
    pending: Option<FileSample>,
    prompt_visible: bool,
    error: Option<String>,
    attempts: u32,
}

impl RetryState {
    /// The sample awaiting a password, if any.
    pub fn pending(&self) -> Option<&FileSample> {
        self.pending.as_ref()
    }

    /// Whether the password prompt should be shown.
    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    /// The last password failure message, if the prompt is a retry.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of rejected password submissions.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether no password is outstanding.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none() && !self.prompt_visible && self.error.is_none() && self.attempts == 0
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Observable state of the inspection flow.
///
/// One session outlives many attempts; each attempt's transitions are
/// guarded by its [`AttemptId`].
#[derive(Debug, Default)]
pub struct InspectSession {
    retry: RetryState,
    result: Option<InspectionReport>,
    phase: Phase,
    generation: u64,
}

impl InspectSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, discarding any previous result and retry
    /// state. Returns the token guarding this attempt's transitions.
    pub fn begin(&mut self) -> AttemptId {
        self.generation += 1;
        self.retry.clear();
        self.result = None;
        self.phase = Phase::Reading;
        AttemptId(self.generation)
    }

    /// Mark the attempt as delegating to the parsing library.
    pub fn start_parsing(&mut self, id: AttemptId) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.phase = Phase::Parsing;
        true
    }

    /// Enter (or re-enter) the awaiting-password state.
    ///
    /// The first entry stores the pending sample with no error; a retry
    /// records the failure message and increments the attempt counter
    /// without clearing the pending sample.
    pub fn require_password(&mut self, id: AttemptId, sample: &FileSample, invalid: bool) -> bool {
        if !self.is_current(id) {
            return false;
        }

        if self.retry.pending.is_none() {
            self.retry.pending = Some(sample.clone());
        }
        self.retry.prompt_visible = true;
        if invalid {
            self.retry.error = Some(INVALID_PASSWORD_MESSAGE.to_string());
            self.retry.attempts += 1;
        } else {
            self.retry.error = None;
        }
        self.result = None;
        self.phase = Phase::AwaitingPassword;

        debug_assert_eq!(self.retry.pending.is_some(), self.retry.prompt_visible);
        true
    }

    /// Record a finished report, clearing the retry state.
    pub fn complete(&mut self, id: AttemptId, report: InspectionReport) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.retry.clear();
        self.result = Some(report);
        self.phase = Phase::Done;
        true
    }

    /// Record a terminal failure, clearing result and retry state.
    pub fn fail(&mut self, id: AttemptId) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.retry.clear();
        self.result = None;
        self.phase = Phase::Failed;
        true
    }

    /// Close the password prompt, discarding the pending sample and the
    /// whole retry state at once. No extraction occurs.
    pub fn cancel_prompt(&mut self) {
        self.retry.clear();
        self.result = None;
        self.phase = Phase::Idle;
    }

    /// The finished report, when the last attempt completed.
    pub fn result(&self) -> Option<&InspectionReport> {
        self.result.as_ref()
    }

    /// Current password-retry state.
    pub fn retry(&self) -> &RetryState {
        &self.retry
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn is_current(&self, id: AttemptId) -> bool {
        id.0 == self.generation
    }
}

/// Drive one file through read, probe, parse, and the password-retry
/// loop until it completes, is cancelled, or fails terminally.
///
/// The prompt is asked for a password each time the library (or the
/// byte probe) demands one; a submission is resolved before the next
/// request, so submissions never overlap. Returns the finished report.
pub async fn run_inspection(
    inspector: &Inspector,
    session: &mut InspectSession,
    path: &Path,
    initial_password: Option<String>,
    prompt: &mut dyn PasswordPrompt,
) -> Result<InspectionReport> {
    let id = session.begin();

    let sample = match FileSample::read(path).await {
        Ok(sample) => sample,
        Err(err) => {
            session.fail(id);
            return Err(err);
        }
    };

    let mut password = initial_password;
    loop {
        session.start_parsing(id);

        match inspector.inspect(&sample, password.as_deref()).await {
            Ok(Attempt::Complete(report)) => {
                session.complete(id, report.clone());
                return Ok(report);
            }
            Ok(Attempt::NeedsPassword { invalid }) => {
                session.require_password(id, &sample, invalid);

                match prompt.request(session.retry()) {
                    Ok(Some(next)) => password = Some(next),
                    Ok(None) => {
                        session.cancel_prompt();
                        return Err(PdfMetaError::Cancelled);
                    }
                    Err(err) => {
                        session.fail(id);
                        return Err(err);
                    }
                }
            }
            Err(err) => {
                session.fail(id);
                return Err(err);
            }
        }
    }
}
