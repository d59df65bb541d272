/// Frequency of the clock driving the core and the HPM counter.
pub const CLOCK_HZ: u32 = 100_000_000;
/// Counter cycles per microsecond (10ns period at 100 MHz).
pub const CYCLES_PER_US: u32 = CLOCK_HZ / 1_000_000;
/// Console baud rate.
pub const BAUD: u32 = 9600;

/// Iterations of the arithmetic benchmark.
pub const ARITH_ITERATIONS: u32 = 1_000_000;
/// Repetitions of the memory benchmark's copy pass.
pub const MEM_REPEAT: u32 = 100_000;
/// Elements copied per memory benchmark pass.
pub const MEM_LEN: usize = 100;
