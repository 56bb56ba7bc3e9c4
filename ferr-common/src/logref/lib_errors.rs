//! Library log references.
//!
//! Codes raised by the shared routing-suite library, published as two tables
//! (warnings and errors) and registered by [`lib_error_init`].
//!
//! # Code Layout
//!
//! All codes live in the library range starting at [`LIB_FERR_START`]. Each
//! variant of [`LibLogRef`] has a fixed offset from that start. Offset 17 is
//! reserved and must not be reused.
//!
//! | Offset | Code        | Table    | Subsystem                |
//! |--------|-------------|----------|--------------------------|
//! | 0-12   | 0x06000001+ | errors   | privileges, sockets, ... |
//! | 13-16  | 0x0600000E+ | warnings | snmp, stream, ns, events |
//! | 17     | 0x06000012  | -        | reserved                 |
//! | 18-20  | 0x06000013+ | warnings | route-map, config, vrf   |

use std::fmt;
use tracing::debug;

use super::range::LIB_FERR_START;
use super::registry::log_ref_add;
use super::{LogRef, LogRefKind};

/// Every log reference raised by the shared library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LibLogRef {
    // =========================================================================
    // Errors
    // =========================================================================
    /// Raising or lowering privileges failed
    Privileges,
    /// VRF subsystem failed to start
    VrfStart,
    /// Socket operation failed
    Socket,
    /// Zebra and client disagree on the ZAPI version
    ZapiMissmatch,
    /// ZAPI message encoding problem
    ZapiEncode,
    /// ZAPI socket problem
    ZapiSocket,
    /// A vital system call failed
    SystemCall,
    /// VTY or configuration file problem
    Vty,
    /// Interface data from the kernel is inconsistent
    Interface,
    /// Namespace data from the kernel is inconsistent
    Ns,
    /// A code path was not updated by new development
    Development,
    /// ZeroMQ subsystem failure
    Zmq,
    /// Feature not compiled in or not available on this platform
    Unavailable,

    // =========================================================================
    // Warnings
    // =========================================================================
    /// SNMP AgentX returned a warning
    Snmp,
    /// Stream sanity check failed
    Stream,
    /// Invalid namespace parameter at startup
    LinuxNs,
    /// The event loop ran a slow task
    SlowThread,
    /// Route-map recursion limit reached
    RmapRecursionLimit,
    /// Falling back to the backup configuration file
    BackupConfig,
    /// VRF name has an invalid length
    VrfLength,
}

impl LibLogRef {
    /// Offset of the code from [`LIB_FERR_START`].
    #[must_use]
    pub const fn offset(&self) -> u32 {
        match self {
            Self::Privileges => 0,
            Self::VrfStart => 1,
            Self::Socket => 2,
            Self::ZapiMissmatch => 3,
            Self::ZapiEncode => 4,
            Self::ZapiSocket => 5,
            Self::SystemCall => 6,
            Self::Vty => 7,
            Self::Interface => 8,
            Self::Ns => 9,
            Self::Development => 10,
            Self::Zmq => 11,
            Self::Unavailable => 12,
            Self::Snmp => 13,
            Self::Stream => 14,
            Self::LinuxNs => 15,
            Self::SlowThread => 16,
            // 17 is reserved
            Self::RmapRecursionLimit => 18,
            Self::BackupConfig => 19,
            Self::VrfLength => 20,
        }
    }

    #[must_use]
    pub const fn code(&self) -> u32 {
        LIB_FERR_START + self.offset()
    }

    /// Table the code is published in.
    #[must_use]
    pub const fn kind(&self) -> LogRefKind {
        match self {
            Self::Snmp
            | Self::Stream
            | Self::LinuxNs
            | Self::SlowThread
            | Self::RmapRecursionLimit
            | Self::BackupConfig
            | Self::VrfLength => LogRefKind::Warning,
            Self::Privileges
            | Self::VrfStart
            | Self::Socket
            | Self::ZapiMissmatch
            | Self::ZapiEncode
            | Self::ZapiSocket
            | Self::SystemCall
            | Self::Vty
            | Self::Interface
            | Self::Ns
            | Self::Development
            | Self::Zmq
            | Self::Unavailable => LogRefKind::Error,
        }
    }

    /// The published descriptor for this code.
    #[must_use]
    pub fn log_ref(&self) -> LogRef {
        let table = match self.kind() {
            LogRefKind::Warning => LIB_WARNINGS,
            LogRefKind::Error => LIB_ERRORS,
        };
        let code = self.code();
        table
            .iter()
            .find(|entry| entry.code == code)
            .copied()
            .unwrap_or(LogRef::END)
    }

    /// Resolve a numeric code back to its variant.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.code() == code)
    }

    #[must_use]
    pub const fn all() -> &'static [LibLogRef] {
        &[
            // Errors
            Self::Privileges,
            Self::VrfStart,
            Self::Socket,
            Self::ZapiMissmatch,
            Self::ZapiEncode,
            Self::ZapiSocket,
            Self::SystemCall,
            Self::Vty,
            Self::Interface,
            Self::Ns,
            Self::Development,
            Self::Zmq,
            Self::Unavailable,
            // Warnings
            Self::Snmp,
            Self::Stream,
            Self::LinuxNs,
            Self::SlowThread,
            Self::RmapRecursionLimit,
            Self::BackupConfig,
            Self::VrfLength,
        ]
    }
}

impl fmt::Display for LibLogRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log_ref())
    }
}

/// Library warnings, terminated by [`LogRef::END`].
pub static LIB_WARNINGS: &[LogRef] = &[
    LogRef::new(
        LibLogRef::Snmp.code(),
        "SNMP has discovered a warning",
        "The SNMP AgentX library has returned a warning that we should report to the end user",
        "Gather Log data and open an Issue.",
    ),
    LogRef::new(
        LibLogRef::Stream.code(),
        "The stream subsystem has encountered an error",
        "During sanity checking stream.c has detected an error in the data associated with a particular stream",
        "Gather log data and open an Issue, restart FRR",
    ),
    LogRef::new(
        LibLogRef::LinuxNs.code(),
        "The Linux namespace subsystem has encountered a parsing error",
        "During system startup an invalid parameter for the namesapce was give to FRR",
        "Gather log data and open an Issue. restart FRR",
    ),
    LogRef::new(
        LibLogRef::SlowThread.code(),
        "The Event subsystem has detected a slow process",
        "The Event subsystem has detected a slow process, this typically indicates that FRR is having trouble completing work in a timely manner.  This can be either a misconfiguration, bug, or some combination therof.",
        "Gather log data and open an Issue",
    ),
    LogRef::new(
        LibLogRef::RmapRecursionLimit.code(),
        "Reached the Route-Map Recursion Limit",
        "The Route-Map subsystem has detected a route-map depth of RMAP_RECURSION_LIMIT and has stopped processing",
        "Re-work the Route-Map in question to not have so many route-map statements, or recompile FRR with a higher limit",
    ),
    LogRef::new(
        LibLogRef::BackupConfig.code(),
        "Unable to open configuration file",
        "The config subsystem attempted to read in it's configuration file which failed, so we are falling back to the backup config file to see if it is available",
        "Create configuration file",
    ),
    LogRef::new(
        LibLogRef::VrfLength.code(),
        "The VRF subsystem has encountered a parsing error",
        "The VRF subsystem, during initialization, has found a parsing error with input it has received",
        "Check the length of the vrf name and adjust accordingly",
    ),
    LogRef::END,
];

/// Library errors, terminated by [`LogRef::END`].
pub static LIB_ERRORS: &[LogRef] = &[
    LogRef::new(
        LibLogRef::Privileges.code(),
        "Failure to raise or lower privileges",
        "FRR attempted to raise or lower its privileges and was unable to do so",
        "Ensure that you are running FRR as the frr user and that the user has sufficient privileges to properly access root privileges",
    ),
    LogRef::new(
        LibLogRef::VrfStart.code(),
        "VRF Failure on Start",
        "Upon startup FRR failed to properly initialize and startup the VRF subsystem",
        "Ensure that there is sufficient memory to start processes and restart FRR",
    ),
    LogRef::new(
        LibLogRef::Socket.code(),
        "Socket Error",
        "When attempting to access a socket a system error has occured and we were unable to properly complete the request",
        "Ensure that there are sufficient system resources available and ensure that the frr user has sufficient permisions to work.  If necessary open an Issue",
    ),
    LogRef::new(
        LibLogRef::ZapiMissmatch.code(),
        "ZAPI Error",
        "A version miss-match has been detected between zebra and client protocol",
        "Two different versions of FRR have been installed and the install is not properly setup.  Completely stop FRR, remove it from the system and reinstall.  Typically only developers should see this issue.",
    ),
    LogRef::new(
        LibLogRef::ZapiEncode.code(),
        "ZAPI Error",
        "The ZAPI subsystem has detected an encoding issue, between zebra and a client protocol",
        "Gather data and open an Issue, also Restart FRR",
    ),
    LogRef::new(
        LibLogRef::ZapiSocket.code(),
        "ZAPI Error",
        "The ZAPI subsystem has detected a socket error between zebra and a client",
        "Restart FRR",
    ),
    LogRef::new(
        LibLogRef::SystemCall.code(),
        "System Call Error",
        "FRR has detected a error from using a vital system call and has probably already exited",
        "Ensure permissions are correct for FRR files, users and groups are correct. Additionally check that sufficient system resources are available.",
    ),
    LogRef::new(
        LibLogRef::Vty.code(),
        "VTY Subsystem Error",
        "FRR has detected a problem with the specified configuration file",
        "Ensure configuration file exists and has correct permissions for operations Additionally ensure that all config lines are correct as well",
    ),
    LogRef::new(
        LibLogRef::Interface.code(),
        "Interface Subsystem Error",
        "FRR has detected a problem with interface data from the kernel as it deviates from what we would expect to happen via normal netlink messaging",
        "Open an Issue with all relevant log files and restart FRR",
    ),
    LogRef::new(
        LibLogRef::Ns.code(),
        "NameSpace Subsystem Error",
        "FRR has detected a problem with NameSpace data from the kernel as it deviates from what we would expect to happen via normal kernel messaging",
        "Open an Issue with all relevant log files and restart FRR",
    ),
    LogRef::new(
        LibLogRef::Development.code(),
        "Developmental Escape Error",
        "FRR has detected an issue where new development has not properly updated all code paths.",
        "Open an Issue with all relevant log files",
    ),
    LogRef::new(
        LibLogRef::Zmq.code(),
        "ZMQ Subsystem Error",
        "FRR has detected an issue with the Zero MQ subsystem and ZeroMQ is not working properly now",
        "Open an Issue with all relevant log files and restart FRR",
    ),
    LogRef::new(
        LibLogRef::Unavailable.code(),
        "Feature or system unavailable",
        "FRR was not compiled with support for a particular feature, or it is not available on the current platform",
        "Recompile FRR with the feature enabled, or find out what platforms support the feature",
    ),
    LogRef::END,
];

/// Register the library tables with the process-wide registry.
///
/// Call once during startup, before anything reports a library code.
/// Calling it again leaves the registry unchanged.
pub fn lib_error_init() {
    let warnings = log_ref_add(LIB_WARNINGS);
    let errors = log_ref_add(LIB_ERRORS);
    debug!(
        warnings = warnings.added,
        errors = errors.added,
        "Library log references registered"
    );
}
