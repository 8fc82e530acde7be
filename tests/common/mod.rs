//! Shared fixtures: a record set shaped like real generated documentation
//! search data.

// Not every integration test binary uses every helper.
#![allow(dead_code)]

use doxidex::{RawRecord, SymbolKind};

pub fn record(name: &str, scope: &str, anchor: &str, kind: SymbolKind) -> RawRecord {
    RawRecord {
        name: name.to_string(),
        scope: (!scope.is_empty()).then(|| scope.to_string()),
        anchor: anchor.to_string(),
        signature: None,
        kind,
    }
}

pub fn halide_records() -> Vec<RawRecord> {
    use SymbolKind::{Class, File, Function, Namespace, Struct, Variable};
    vec![
        record(
            "unroll",
            "Halide::ScheduleHandle",
            "class_halide_1_1_schedule_handle.html#a0cf1",
            Function,
        ),
        record(
            "unroll",
            "Halide::Func",
            "class_halide_1_1_func.html#ab005",
            Function,
        ),
        record(
            "unroll_loops",
            "Halide::Internal",
            "namespace_halide_1_1_internal.html#adc1c",
            Function,
        ),
        record(
            "unique_name",
            "Halide::Internal",
            "namespace_halide_1_1_internal.html#acd57",
            Function,
        ),
        record(
            "unique_name",
            "Halide::Internal",
            "namespace_halide_1_1_internal.html#a22aa",
            Function,
        ),
        record("update", "Halide::Func", "class_halide_1_1_func.html#acac1", Function),
        record(
            "use_avx",
            "Halide::Internal::CodeGen_X86",
            "class_code_gen___x86.html#a83d2",
            Function,
        ),
        record(
            "use_android",
            "Halide::Internal::CodeGen_ARM",
            "class_code_gen___a_r_m.html#acf80",
            Variable,
        ),
        record("UnrollLoops.h", "", "_unroll_loops_8h.html", File),
        record("Func", "Halide", "class_halide_1_1_func.html", Class),
        record("ImageParam", "Halide", "class_halide_1_1_image_param.html", Class),
        record(
            "IntrusivePtr< const IRNode >",
            "Halide::Internal",
            "struct_halide_1_1_internal_1_1_intrusive_ptr.html",
            Struct,
        ),
        record("Internal", "Halide", "namespace_halide_1_1_internal.html", Namespace),
        record(
            "debug_to_file",
            "Halide::Func",
            "class_halide_1_1_func.html#ad698",
            Function,
        ),
        record(
            "copy_to_dev",
            "Halide::Buffer",
            "class_halide_1_1_buffer.html#a8f2c",
            Function,
        ),
    ]
}
