//! Byte-level console transport.
//!
//! The harness only needs three things from the console: print text, print an unsigned
//! integer in decimal, and poll for one input byte without blocking.

use core::fmt;

pub trait Console {
    /// Outputs a byte, waiting for the transport to accept it.
    fn putc(&mut self, c: u8);

    /// Returns the next input byte, or `None` right away if there is none.
    fn try_getc(&mut self) -> Option<u8>;

    fn put_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.putc(byte);
        }
    }

    /// Outputs `n` in base 10.
    fn put_int(&mut self, mut n: u32) {
        // u32::MAX has 10 digits
        let mut digits = [0u8; 10];
        let mut len = 0;

        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        for &d in digits[..len].iter().rev() {
            self.putc(d);
        }
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn putc(&mut self, c: u8) {
        (**self).putc(c)
    }

    fn try_getc(&mut self) -> Option<u8> {
        (**self).try_getc()
    }
}

/// Lets `write!` format straight onto a console.
pub struct Writer<'a, C: Console + ?Sized>(pub &'a mut C);

impl<C: Console + ?Sized> fmt::Write for Writer<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_str(s);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::sim::SimConsole;
    use super::*;

    #[test]
    fn put_int_decimal() {
        let mut console = SimConsole::default();
        for n in [0, 7, 10, 500, 4_294_967_295] {
            console.put_int(n);
            console.putc(b' ');
        }
        assert_eq!(console.output, "0 7 10 500 4294967295 ");
    }

    #[test]
    fn writer_formats_onto_console() {
        let mut console = SimConsole::default();
        write!(Writer(&mut console), "{}-{:x}", 12, 255).unwrap();
        assert_eq!(console.output, "12-ff");
    }

    #[test]
    fn try_getc_drains_then_none() {
        let mut console = SimConsole::with_input(b"ab");
        assert_eq!(console.try_getc(), Some(b'a'));
        assert_eq!(console.try_getc(), Some(b'b'));
        assert_eq!(console.try_getc(), None);
        assert_eq!(console.polls, 3);
    }
}
