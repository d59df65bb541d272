use core::fmt::{self, Write};
use core::panic::PanicInfo;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::console::{Console, Writer};
use crate::memlayout::UART0;
use crate::uart::Uart;

static PANICKED: AtomicBool = AtomicBool::new(false);

pub fn is_panicked() -> bool {
    PANICKED.load(Ordering::Relaxed)
}

pub fn _print<C: Console + ?Sized>(console: &mut C, args: fmt::Arguments<'_>, newline: bool) {
    let mut writer = Writer(console);

    // Writer never fails, the console has no error path.
    let _ = writer.write_fmt(args);
    if newline {
        let _ = writer.write_str("\r\n");
    }
}

/// Formats onto the console given as the first argument.
#[macro_export]
macro_rules! print {
    ($console:expr, $($arg:tt)*) => {{
        $crate::printf::_print($console, format_args!($($arg)*), false);
    }};
}

/// Like `print!`, ending the line with `\r\n`.
#[macro_export]
macro_rules! println {
    ($console:expr) => {
        $crate::print!($console, "\r\n");
    };
    ($console:expr, $($arg:tt)*) => {{
        $crate::printf::_print($console, format_args!($($arg)*), true);
    }};
}

pub fn handle_panic(info: &PanicInfo) -> ! {
    // A panic while printing the first one must not print again.
    if !is_panicked() {
        PANICKED.store(true, Ordering::Relaxed);

        // Safety: UART0 is the console slot. The harness that owned the console is
        // never resumed.
        let mut uart = unsafe { Uart::new(UART0) };
        println!(&mut uart, "\r\npanicked: {info}");
    }

    #[allow(clippy::empty_loop)]
    loop {}
}
