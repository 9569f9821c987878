//! C-compatible API exposed to the host application.
//!
//! Strings returned by this module are owned by Rust and must be released
//! with [`fairaudit_free_str`]. Audit failures are reported inside the
//! returned JSON as `{"ok":false,"code":N,"error":"..."}`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::time::Instant;

use log::Level;
use serde::Deserialize;
use serde_json::json;

use crate::audit::{audit_with_policy, AuditPolicy, AuditResult};
use crate::common::config::AuditCfg;
use crate::common::error::{ErrorCode, FairnessError, FairnessResult};
use crate::common::log::log_event;
use crate::common::time;
use crate::evaluation::{disparate_impact_ratio, gini_coefficient, ConfusionMatrix};

const MODULE: &str = "api::ffi";

/// Body accepted by [`fairaudit_run_audit`].
#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    pub protected: ConfusionMatrix,
    pub privileged: ConfusionMatrix,
    /// Falls back to the policy configured in the environment.
    #[serde(default)]
    pub policy: Option<AuditPolicy>,
}

/// ABI version to coordinate with the host layer.
#[no_mangle]
pub extern "C" fn fairaudit_api_version() -> u32 {
    1
}

/// Load the environment configuration and apply its log level.
/// Returns an [`ErrorCode`] value.
#[no_mangle]
pub extern "C" fn fairaudit_init() -> u32 {
    let start = Instant::now();
    let code = match AuditCfg::load() {
        Ok(cfg) => {
            log::set_max_level(cfg.log_level);
            ErrorCode::Ok
        }
        Err(err) => {
            log::error!(target: MODULE, "{err}");
            err.code()
        }
    };
    log_event(Level::Info, MODULE, "init", code as u32, time::elapsed_ms(start));
    code as u32
}

/// Run an audit from a JSON request and return a JSON response (caller must free).
///
/// # Safety
/// `request` must be null or point to a NUL-terminated string.
#[no_mangle]
pub extern "C" fn fairaudit_run_audit(request: *const c_char) -> *const c_char {
    let start = Instant::now();

    let outcome = if request.is_null() {
        Err(FairnessError::invalid("null request"))
    } else {
        let raw = unsafe { CStr::from_ptr(request) }.to_string_lossy();
        run_audit_json(&raw)
    };

    let (body, code) = match outcome {
        Ok(result) => (success_json(&result), ErrorCode::Ok),
        Err(err) => {
            let code = err.code();
            (error_json(&err), code)
        }
    };

    let level = if code == ErrorCode::Ok {
        Level::Info
    } else {
        Level::Warn
    };
    log_event(level, MODULE, "run_audit", code as u32, time::elapsed_ms(start));

    string_to_raw(body)
}

/// Disparate impact ratio for raw counts. May return `+inf`.
#[no_mangle]
pub extern "C" fn fairaudit_disparate_impact(
    protected_positives: u64,
    protected_total: u64,
    privileged_positives: u64,
    privileged_total: u64,
) -> f64 {
    disparate_impact_ratio(
        protected_positives,
        protected_total,
        privileged_positives,
        privileged_total,
    )
}

/// Gini coefficient of `len` doubles starting at `values`. Null yields 0.
///
/// # Safety
/// `values` must be null or valid for reads of `len` doubles.
#[no_mangle]
pub extern "C" fn fairaudit_gini(values: *const f64, len: usize) -> f64 {
    if values.is_null() || len == 0 {
        return 0.0;
    }
    let slice = unsafe { std::slice::from_raw_parts(values, len) };
    gini_coefficient(slice)
}

/// Free strings allocated by Rust.
#[no_mangle]
pub extern "C" fn fairaudit_free_str(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(ptr as *mut c_char);
    }
}

/// Parse, validate and run one audit request.
pub fn run_audit_json(raw: &str) -> FairnessResult<AuditResult> {
    let request: AuditRequest = serde_json::from_str(raw)?;
    let policy = match request.policy {
        Some(policy) => policy,
        None => AuditCfg::load()?.policy,
    };
    policy.validate()?;
    Ok(audit_with_policy(
        &request.protected,
        &request.privileged,
        &policy,
    ))
}

fn success_json(result: &AuditResult) -> String {
    json!({ "ok": true, "result": result }).to_string()
}

fn error_json(err: &FairnessError) -> String {
    json!({ "ok": false, "code": err.code() as u32, "error": err.to_string() }).to_string()
}

fn string_to_raw(s: String) -> *const c_char {
    match CString::new(s) {
        Ok(cstring) => cstring.into_raw(),
        Err(_) => fallback_json_raw(),
    }
}

fn fallback_json_raw() -> *const c_char {
    let err = FairnessError::Internal("response contained an interior NUL byte");
    log::error!(target: MODULE, "{err}");
    CString::new(error_json(&err))
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}
