// Reset vector. The loader jumps to `_entry` with no stack and an unknown `gp`.
core::arch::global_asm!(
    ".section .entry, \"ax\"",
    ".global _entry",
    "_entry:",
    ".option push",
    ".option norelax",
    "    la gp, __global_pointer$", // linker-relaxed accesses rely on gp
    ".option pop",
    "    la sp, _stack_top",        // stack grows down from the top of RAM
    "    call start",
    "1:  j 1b",
);
