use std::ffi::{CStr, CString};
use std::io;

use crate::identity::{Account, Group, IdentityError, IdentityResolver};

/// Upper bound for the reentrant lookup buffer.
const MAX_BUFFER_SIZE: usize = 1 << 20;
const FALLBACK_BUFFER_SIZE: usize = 1024;

/// Resolver backed by the system `passwd` and `group` databases (NSS).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentities;

impl IdentityResolver for SystemIdentities {
    fn account(&self, name: &str) -> Result<Account, IdentityError> {
        let c_name = c_name(name)?;
        let mut buf_size = initial_buffer_size(libc::_SC_GETPW_R_SIZE_MAX);

        loop {
            let mut buf: Vec<libc::c_char> = vec![0; buf_size];
            // SAFETY: all-zero is a valid `passwd` (null pointers, zero ids).
            let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();

            let errno = unsafe {
                libc::getpwnam_r(
                    c_name.as_ptr(),
                    &mut entry,
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };

            if errno == libc::ERANGE && buf_size < MAX_BUFFER_SIZE {
                buf_size *= 2;
                continue;
            }
            if result.is_null() {
                if is_not_found(errno) {
                    return Err(IdentityError::AccountNotFound {
                        name: name.to_string(),
                    });
                }
                return Err(IdentityError::Lookup {
                    name: name.to_string(),
                    source: io::Error::from_raw_os_error(errno),
                });
            }

            // SAFETY: on success the string fields point into `buf`, which is still alive.
            let shell = unsafe { owned_string(entry.pw_shell) };
            tracing::debug!(user = name, uid = entry.pw_uid, shell = %shell, "Resolved account");
            return Ok(Account {
                name: name.to_string(),
                uid: entry.pw_uid,
                gid: entry.pw_gid,
                shell,
            });
        }
    }

    fn group(&self, name: &str) -> Result<Group, IdentityError> {
        let c_name = c_name(name)?;
        let mut buf_size = initial_buffer_size(libc::_SC_GETGR_R_SIZE_MAX);

        loop {
            let mut buf: Vec<libc::c_char> = vec![0; buf_size];
            // SAFETY: all-zero is a valid `group` (null pointers, zero gid).
            let mut entry: libc::group = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::group = std::ptr::null_mut();

            let errno = unsafe {
                libc::getgrnam_r(
                    c_name.as_ptr(),
                    &mut entry,
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };

            if errno == libc::ERANGE && buf_size < MAX_BUFFER_SIZE {
                buf_size *= 2;
                continue;
            }
            if result.is_null() {
                if is_not_found(errno) {
                    return Err(IdentityError::GroupNotFound {
                        name: name.to_string(),
                    });
                }
                return Err(IdentityError::Lookup {
                    name: name.to_string(),
                    source: io::Error::from_raw_os_error(errno),
                });
            }

            tracing::debug!(group = name, gid = entry.gr_gid, "Resolved group");
            return Ok(Group {
                name: name.to_string(),
                gid: entry.gr_gid,
            });
        }
    }
}

fn c_name(name: &str) -> Result<CString, IdentityError> {
    CString::new(name).map_err(|_| IdentityError::InvalidName {
        name: name.to_string(),
    })
}

fn initial_buffer_size(key: libc::c_int) -> usize {
    let suggested = unsafe { libc::sysconf(key) };
    if suggested > 0 {
        suggested as usize
    } else {
        FALLBACK_BUFFER_SIZE
    }
}

/// getpwnam_r(3): a missing entry is reported as 0 or one of these codes.
fn is_not_found(errno: libc::c_int) -> bool {
    matches!(
        errno,
        0 | libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM
    )
}

unsafe fn owned_string(ptr: *const libc::c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}
