#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
#[unsafe(export_name = "main")]
extern "C" fn main() -> ! {
    unsafe { hpm::main() }
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo<'_>) -> ! {
    hpm::panic_handler(info)
}

/// Hosted build: the same menu over stdin/stdout, against a simulated counter driven
/// by the host clock.
#[cfg(not(target_os = "none"))]
fn main() {
    terminal::run()
}

#[cfg(not(target_os = "none"))]
mod terminal {
    use std::io::{self, Read, Write};
    use std::sync::mpsc::{self, Receiver, TryRecvError};
    use std::thread;

    use hpm::bench::Workloads;
    use hpm::console::Console;
    use hpm::harness::Harness;
    use hpm::hosted::SimHpm;
    use hpm::hpm::Hpm;
    use hpm::memlayout::HPM0;

    /// Terminal console. A reader thread feeds stdin into a channel so polling never
    /// blocks.
    struct Stdio {
        rx: Receiver<u8>,
    }

    impl Stdio {
        fn new() -> Self {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                for byte in io::stdin().lock().bytes() {
                    let Ok(byte) = byte else { break };
                    if tx.send(byte).is_err() {
                        break;
                    }
                }
            });
            Self { rx }
        }
    }

    impl Console for Stdio {
        fn putc(&mut self, c: u8) {
            let mut out = io::stdout().lock();
            let _ = out.write_all(&[c]);
            if c == b'\n' {
                let _ = out.flush();
            }
        }

        fn try_getc(&mut self) -> Option<u8> {
            match self.rx.try_recv() {
                Ok(c) => Some(c),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    let _ = io::stdout().flush();
                    std::process::exit(0)
                }
            }
        }
    }

    pub fn run() {
        let hpm = Hpm::with_bus(HPM0, SimHpm::new(HPM0));
        Harness::new(hpm, Stdio::new(), Workloads::DEFAULT).run()
    }
}
