//! Benchmarks for name resolution.
//!
//! Covers the hot paths of a generation run:
//! - Class name resolution with and without a registration attribute
//! - Objective-C and Mono spellings of wrapped types
//! - Parameter disambiguation in a wide signature
//! - Session-wide class name resolution, sequential and parallel

extern crate dotbind;

use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, Criterion};
use dotbind::prelude::*;

fn register(name: &str) -> AttributeData {
    AttributeData::new("Foundation.RegisterAttribute")
        .arg("System.String", AttributeValue::String(name.to_string()))
}

/// Benchmark the default `Namespace_Type` name of a nested class.
fn bench_class_name_default(c: &mut Criterion) {
    let outer = TypeBuilder::class("App.Widgets", "Panel").build().unwrap();
    let inner = TypeBuilder::class("App.Widgets", "Item")
        .nested_in(&outer)
        .build()
        .unwrap();
    let resolver = ClassNameResolver::default();

    c.bench_function("class_name_default", |b| {
        b.iter(|| {
            let mut buffer = DiagnosticBuffer::new();
            black_box(resolver.resolve(black_box(&inner), &mut buffer))
        });
    });
}

/// Benchmark a registration attribute with a conflicting Name property (one warning).
fn bench_class_name_conflict(c: &mut Criterion) {
    let ty = TypeBuilder::class("App", "Foo")
        .attribute(register("Bar").named("Name", AttributeValue::String("Foo".to_string())))
        .build()
        .unwrap();
    let resolver = ClassNameResolver::default();

    c.bench_function("class_name_conflict", |b| {
        b.iter(|| {
            let mut buffer = DiagnosticBuffer::new();
            black_box(resolver.resolve(black_box(&ty), &mut buffer))
        });
    });
}

/// Benchmark spelling a by-reference to an array of registered classes.
/// C#: ref Shape[] shapes
fn bench_map_wrapped(c: &mut Criterion) {
    let shape = TypeBuilder::class("Drawing", "Shape")
        .attribute(register("DRShape"))
        .build()
        .unwrap();
    let shapes = TypeBuilder::array_of(&shape).build().unwrap();
    let shapes_ref = TypeBuilder::by_ref(&shapes).build().unwrap();
    let mapper = TypeNameMapper::default();

    c.bench_function("map_objc_ref_array", |b| {
        b.iter(|| {
            let mut buffer = DiagnosticBuffer::new();
            black_box(mapper.map(black_box(&shapes_ref), Vocabulary::ObjC, &mut buffer))
        });
    });

    c.bench_function("map_mono_ref_array", |b| {
        b.iter(|| black_box(mono_name(black_box(&shapes_ref))));
    });
}

/// Benchmark naming every parameter of an eight-parameter signature.
/// C#: void Set(double a, double b, int x, int y, string s, Shape p, Shape q, bool f)
fn bench_parameter_names(c: &mut Criterion) {
    let double = TypeBuilder::primitive(TypeCode::Double).build().unwrap();
    let int = TypeBuilder::primitive(TypeCode::Int32).build().unwrap();
    let shape = TypeBuilder::class("Drawing", "Shape").build().unwrap();
    let params = ParameterDescriptor::list([
        ("a", double.clone()),
        ("b", double),
        ("x", int.clone()),
        ("y", int),
        ("s", TypeBuilder::primitive(TypeCode::String).build().unwrap()),
        ("p", shape.clone()),
        ("q", shape),
        ("f", TypeBuilder::primitive(TypeCode::Boolean).build().unwrap()),
    ]);
    let namer = ParameterNamer::default();

    c.bench_function("parameter_names_8", |b| {
        b.iter(|| {
            let mut buffer = DiagnosticBuffer::new();
            for param in &params {
                black_box(namer.disambiguated_name(param, &params, &mut buffer).unwrap());
            }
        });
    });
}

/// Benchmark session-wide resolution over 1000 types.
fn bench_session(c: &mut Criterion) {
    let registry = Arc::new(TypeRegistry::new());
    for i in 0..1000 {
        let builder = TypeBuilder::class("App.Generated", &format!("Type{i}"));
        let builder = if i % 3 == 0 {
            builder.attribute(register(&format!("XType{i}")))
        } else {
            builder
        };
        registry.insert(&builder.build().unwrap()).unwrap();
    }

    let sequential = BindingSession::with_registry(NamingConfig::sequential(), registry.clone());
    c.bench_function("session_classes_1000_sequential", |b| {
        b.iter(|| black_box(sequential.resolve_class_names(registry.as_ref())));
    });

    let parallel = BindingSession::with_registry(NamingConfig::default(), registry.clone());
    c.bench_function("session_classes_1000_parallel", |b| {
        b.iter(|| black_box(parallel.resolve_class_names(registry.as_ref())));
    });
}

criterion_group!(
    benches,
    bench_class_name_default,
    bench_class_name_conflict,
    bench_map_wrapped,
    bench_parameter_names,
    bench_session
);
criterion_main!(benches);
