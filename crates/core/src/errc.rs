//! Portable error conditions
//!
//! [`Errc`] is the POSIX errno set, numbered as on Linux. Values of this enum
//! belong to the [generic category](crate::generic_category) both as error
//! codes and as error conditions, so a raw errno from a storage medium can be
//! tested against a portable condition without knowing where it came from.

use crate::category::generic_category;
use crate::code::{ErrorCode, ErrorCodeEnum};
use crate::condition::{ErrorCondition, ErrorConditionEnum};

macro_rules! errc_table {
    ($($(#[$doc:meta])* $variant:ident = $value:literal, $message:literal;)+) => {
        /// Portable condition codes with their errno values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum Errc {
            $($(#[$doc])* $variant = $value,)+
        }

        impl Errc {
            /// Look up the condition for a raw (positive) errno value.
            pub fn from_raw(value: i32) -> Option<Errc> {
                match value {
                    $($value => Some(Errc::$variant),)+
                    _ => None,
                }
            }

            /// Description of the condition, as `strerror` would give it.
            pub fn message(self) -> &'static str {
                match self {
                    $(Errc::$variant => $message,)+
                }
            }
        }
    };
}

errc_table! {
    /// EPERM
    OperationNotPermitted = 1, "Operation not permitted";
    /// ENOENT
    NoSuchFileOrDirectory = 2, "No such file or directory";
    /// ESRCH
    NoSuchProcess = 3, "No such process";
    /// EINTR
    Interrupted = 4, "Interrupted system call";
    /// EIO
    IoError = 5, "Input/output error";
    /// ENXIO
    NoSuchDeviceOrAddress = 6, "No such device or address";
    /// E2BIG
    ArgumentListTooLong = 7, "Argument list too long";
    /// ENOEXEC
    ExecutableFormatError = 8, "Exec format error";
    /// EBADF
    BadFileDescriptor = 9, "Bad file descriptor";
    /// ECHILD
    NoChildProcess = 10, "No child processes";
    /// EAGAIN / EWOULDBLOCK
    ResourceUnavailableTryAgain = 11, "Resource temporarily unavailable";
    /// ENOMEM
    NotEnoughMemory = 12, "Cannot allocate memory";
    /// EACCES
    PermissionDenied = 13, "Permission denied";
    /// EFAULT
    BadAddress = 14, "Bad address";
    /// EBUSY
    DeviceOrResourceBusy = 16, "Device or resource busy";
    /// EEXIST
    FileExists = 17, "File exists";
    /// EXDEV
    CrossDeviceLink = 18, "Invalid cross-device link";
    /// ENODEV
    NoSuchDevice = 19, "No such device";
    /// ENOTDIR
    NotADirectory = 20, "Not a directory";
    /// EISDIR
    IsADirectory = 21, "Is a directory";
    /// EINVAL
    InvalidArgument = 22, "Invalid argument";
    /// ENFILE
    TooManyFilesOpenInSystem = 23, "Too many open files in system";
    /// EMFILE
    TooManyFilesOpen = 24, "Too many open files";
    /// ENOTTY
    InappropriateIoControlOperation = 25, "Inappropriate ioctl for device";
    /// ETXTBSY
    TextFileBusy = 26, "Text file busy";
    /// EFBIG
    FileTooLarge = 27, "File too large";
    /// ENOSPC
    NoSpaceOnDevice = 28, "No space left on device";
    /// ESPIPE
    InvalidSeek = 29, "Illegal seek";
    /// EROFS
    ReadOnlyFileSystem = 30, "Read-only file system";
    /// EMLINK
    TooManyLinks = 31, "Too many links";
    /// EPIPE
    BrokenPipe = 32, "Broken pipe";
    /// EDOM
    ArgumentOutOfDomain = 33, "Numerical argument out of domain";
    /// ERANGE
    ResultOutOfRange = 34, "Numerical result out of range";
    /// EDEADLK
    ResourceDeadlockWouldOccur = 35, "Resource deadlock avoided";
    /// ENAMETOOLONG
    FilenameTooLong = 36, "File name too long";
    /// ENOLCK
    NoLockAvailable = 37, "No locks available";
    /// ENOSYS
    FunctionNotSupported = 38, "Function not implemented";
    /// ENOTEMPTY
    DirectoryNotEmpty = 39, "Directory not empty";
    /// ELOOP
    TooManySymbolicLinkLevels = 40, "Too many levels of symbolic links";
    /// ENOMSG
    NoMessage = 42, "No message of desired type";
    /// EIDRM
    IdentifierRemoved = 43, "Identifier removed";
    /// ENOSTR
    NotAStream = 60, "Device not a stream";
    /// ENODATA
    NoMessageAvailable = 61, "No data available";
    /// ETIME
    StreamTimeout = 62, "Timer expired";
    /// ENOSR
    NoStreamResources = 63, "Out of streams resources";
    /// ENOLINK
    NoLink = 67, "Link has been severed";
    /// EPROTO
    ProtocolError = 71, "Protocol error";
    /// EBADMSG
    BadMessage = 74, "Bad message";
    /// EOVERFLOW
    ValueTooLarge = 75, "Value too large for defined data type";
    /// EILSEQ
    IllegalByteSequence = 84, "Invalid or incomplete multibyte or wide character";
    /// ENOTSOCK
    NotASocket = 88, "Socket operation on non-socket";
    /// EDESTADDRREQ
    DestinationAddressRequired = 89, "Destination address required";
    /// EMSGSIZE
    MessageSize = 90, "Message too long";
    /// EPROTOTYPE
    WrongProtocolType = 91, "Protocol wrong type for socket";
    /// ENOPROTOOPT
    NoProtocolOption = 92, "Protocol not available";
    /// EPROTONOSUPPORT
    ProtocolNotSupported = 93, "Protocol not supported";
    /// EOPNOTSUPP / ENOTSUP
    OperationNotSupported = 95, "Operation not supported";
    /// EAFNOSUPPORT
    AddressFamilyNotSupported = 97, "Address family not supported by protocol";
    /// EADDRINUSE
    AddressInUse = 98, "Address already in use";
    /// EADDRNOTAVAIL
    AddressNotAvailable = 99, "Cannot assign requested address";
    /// ENETDOWN
    NetworkDown = 100, "Network is down";
    /// ENETUNREACH
    NetworkUnreachable = 101, "Network is unreachable";
    /// ENETRESET
    NetworkReset = 102, "Network dropped connection on reset";
    /// ECONNABORTED
    ConnectionAborted = 103, "Software caused connection abort";
    /// ECONNRESET
    ConnectionReset = 104, "Connection reset by peer";
    /// ENOBUFS
    NoBufferSpace = 105, "No buffer space available";
    /// EISCONN
    AlreadyConnected = 106, "Transport endpoint is already connected";
    /// ENOTCONN
    NotConnected = 107, "Transport endpoint is not connected";
    /// ETIMEDOUT
    TimedOut = 110, "Connection timed out";
    /// ECONNREFUSED
    ConnectionRefused = 111, "Connection refused";
    /// EHOSTUNREACH
    HostUnreachable = 113, "No route to host";
    /// EALREADY
    ConnectionAlreadyInProgress = 114, "Operation already in progress";
    /// EINPROGRESS
    OperationInProgress = 115, "Operation now in progress";
    /// ECANCELED
    OperationCanceled = 125, "Operation canceled";
    /// EOWNERDEAD
    OwnerDead = 130, "Owner died";
    /// ENOTRECOVERABLE
    StateNotRecoverable = 131, "State not recoverable";
}

impl Errc {
    /// EWOULDBLOCK shares its value with EAGAIN.
    pub const OPERATION_WOULD_BLOCK: Errc = Errc::ResourceUnavailableTryAgain;

    /// ENOTSUP shares its value with EOPNOTSUPP.
    pub const NOT_SUPPORTED: Errc = Errc::OperationNotSupported;

    /// The raw errno value.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Description for an arbitrary errno value.
    ///
    /// Zero reads as "Success"; values outside the table as "Unknown error".
    pub fn describe(value: i32) -> &'static str {
        match Errc::from_raw(value) {
            Some(errc) => errc.message(),
            None if value == 0 => "Success",
            None => "Unknown error",
        }
    }
}

impl ErrorCodeEnum for Errc {
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self.as_raw(), generic_category())
    }
}

impl ErrorConditionEnum for Errc {
    fn make_error_condition(self) -> ErrorCondition {
        ErrorCondition::new(self.as_raw(), generic_category())
    }
}
