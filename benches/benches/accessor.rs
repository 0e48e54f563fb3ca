// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_accessor` dispatch strategies.

use core::cell::{Cell, RefCell};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use understory_accessor::{
    ClassGetter, ClassGetterSetter, DefaultGetterSetter, FunctionGetter, FunctionGetterSetter,
    Getter, RefGetter, Setter, StaticClassGetter, StaticClassGetterSetter, read_method,
    write_method,
};

#[derive(Default)]
struct Elem {
    width: f64,
}

impl Elem {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
    }
}

read_method!(Width: Elem => f64 = Elem::width);
write_method!(SetWidth: Elem => f64 = Elem::set_width);

fn bench_accessor(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: DefaultGetterSetter<f64>={} FunctionGetter<f64>={} ClassGetter<Elem,f64>={} StaticClassGetter<Width>={}",
            core::mem::size_of::<DefaultGetterSetter<f64>>(),
            core::mem::size_of::<FunctionGetter<'static, f64>>(),
            core::mem::size_of::<ClassGetter<'static, Elem, f64>>(),
            core::mem::size_of::<StaticClassGetter<'static, Width>>(),
        );
    });

    let mut group = c.benchmark_group("accessor/get");

    group.bench_function("direct_field", |b| {
        let elem = Elem { width: 100.0 };
        b.iter(|| black_box(black_box(&elem).width))
    });

    group.bench_function("stored", |b| {
        let property = DefaultGetterSetter::new(100.0_f64);
        b.iter(|| black_box(black_box(&property).get()))
    });

    group.bench_function("function", |b| {
        let elem = Elem { width: 100.0 };
        let property = FunctionGetter::bind(&elem, Elem::width);
        b.iter(|| black_box(black_box(&property).get()))
    });

    group.bench_function("class_runtime", |b| {
        let elem = Elem { width: 100.0 };
        let property = ClassGetter::new(&elem, Elem::width);
        b.iter(|| black_box(black_box(&property).get()))
    });

    group.bench_function("class_static", |b| {
        let elem = Elem { width: 100.0 };
        let property = StaticClassGetter::<Width>::new(&elem);
        b.iter(|| black_box(black_box(&property).get()))
    });

    group.finish();

    let mut group = c.benchmark_group("accessor/set");

    group.bench_function("direct_field", |b| {
        let mut elem = Elem::default();
        b.iter(|| black_box(&mut elem).width = black_box(123.0))
    });

    group.bench_function("stored", |b| {
        let mut property = DefaultGetterSetter::new(0.0_f64);
        b.iter(|| black_box(&mut property).set(black_box(123.0)))
    });

    group.bench_function("function", |b| {
        let var = Cell::new(0.0_f64);
        let mut property = FunctionGetterSetter::new(|| var.get(), |v| var.set(v));
        b.iter(|| black_box(&mut property).set(black_box(123.0)))
    });

    group.bench_function("function_ref_cell", |b| {
        let elem = RefCell::new(Elem::default());
        let mut property = FunctionGetterSetter::bind(&elem, Elem::width, Elem::set_width);
        b.iter(|| black_box(&mut property).set(black_box(123.0)))
    });

    group.bench_function("class_runtime", |b| {
        let mut elem = Elem::default();
        let mut property = ClassGetterSetter::new(&mut elem, Elem::width, Elem::set_width);
        b.iter(|| black_box(&mut property).set(black_box(123.0)))
    });

    group.bench_function("class_static", |b| {
        let mut elem = Elem::default();
        let mut property = StaticClassGetterSetter::<Width, SetWidth>::new(&mut elem);
        b.iter(|| black_box(&mut property).set(black_box(123.0)))
    });

    group.finish();

    let mut group = c.benchmark_group("accessor/string");

    group.bench_function("get_clone", |b| {
        let property = DefaultGetterSetter::new(String::from("hello world hello world"));
        b.iter(|| black_box(property.get()))
    });

    group.bench_function("get_ref", |b| {
        let property = DefaultGetterSetter::new(String::from("hello world hello world"));
        b.iter(|| black_box(property.get_ref().len()))
    });

    group.bench_function("set", |b| {
        b.iter_batched(
            || DefaultGetterSetter::new(String::new()),
            |mut property| {
                property.set(String::from("hello world"));
                black_box(property);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_accessor);
criterion_main!(benches);
