use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use gstbill::core::*;
use gstbill::{json, pdf, sheet};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn build_invoice(lines: usize, buyer_gstin: &str) -> Invoice {
    let mut builder = InvoiceBuilder::from_profile(&SellerProfile::default(), test_date())
        .number("INV-2024-0001")
        .buyer(
            PartyBuilder::new("Shree Traders", "Ring Road, Surat")
                .gstin(buyer_gstin)
                .build(),
        );

    for i in 1..=lines {
        builder = builder.add_line(
            LineItemBuilder::new(format!("Item {i}"), dec!(5), dec!(120.75))
                .hsn_code("7318")
                .build(),
        );
    }

    builder.build().unwrap()
}

// ── GST engine ─────────────────────────────────────────────────────

fn bench_build_invoice(c: &mut Criterion) {
    c.bench_function("build_invoice_10_lines", |b| {
        b.iter(|| black_box(build_invoice(10, "24ABCDE1234F1Z6")));
    });
}

fn bench_recalculate(c: &mut Criterion) {
    let mut invoice = build_invoice(1000, "24ABCDE1234F1Z6");
    c.bench_function("recalculate_1000_lines", |b| {
        b.iter(|| {
            invoice.recalculate();
            black_box(&invoice.totals);
        });
    });
}

fn bench_buyer_switch(c: &mut Criterion) {
    let mut invoice = build_invoice(100, "24ABCDE1234F1Z6");
    let gstins = ["27AAPFU0939F1ZV", "24ABCDE1234F1Z6"];
    let mut i = 0;
    c.bench_function("set_buyer_gstin_100_lines", |b| {
        b.iter(|| {
            invoice.set_buyer_gstin(gstins[i % 2]);
            i += 1;
            black_box(invoice.totals.grand_total)
        });
    });
}

fn bench_to_words(c: &mut Criterion) {
    c.bench_function("to_words", |b| {
        b.iter(|| black_box(to_words(black_box(98_76_54_321))));
    });
}

fn bench_validate(c: &mut Criterion) {
    let invoice = build_invoice(10, "27AAPFU0939F1ZV");
    c.bench_function("validate_invoice", |b| {
        b.iter(|| black_box(validate_invoice(black_box(&invoice))));
    });
}

fn bench_gstin(c: &mut Criterion) {
    c.bench_function("validate_gstin", |b| {
        b.iter(|| black_box(validate_gstin(black_box("24AELPV7892J1ZK")).is_ok()));
    });
}

// ── Rendering and exchange ─────────────────────────────────────────

fn bench_layout(c: &mut Criterion) {
    let invoice = build_invoice(10, "27AAPFU0939F1ZV");
    c.bench_function("layout_to_text", |b| {
        b.iter(|| black_box(layout(black_box(&invoice)).to_text()));
    });
}

fn bench_pdf(c: &mut Criterion) {
    let invoice = build_invoice(10, "27AAPFU0939F1ZV");
    c.bench_function("pdf_render", |b| {
        b.iter(|| black_box(pdf::to_pdf(black_box(&invoice))));
    });
}

fn bench_json(c: &mut Criterion) {
    let invoice = build_invoice(10, "27AAPFU0939F1ZV");
    let stored = json::to_json(&invoice).unwrap();
    c.bench_function("json_round_trip", |b| {
        b.iter(|| black_box(json::from_json(black_box(&stored))));
    });
}

fn bench_register_export(c: &mut Criterion) {
    let invoices: Vec<Invoice> = (0..100)
        .map(|_| build_invoice(5, "24ABCDE1234F1Z6"))
        .collect();
    c.bench_function("export_register_100_invoices", |b| {
        b.iter(|| black_box(sheet::export_invoices(black_box(&invoices))));
    });
}

fn bench_product_import(c: &mut Criterion) {
    let mut csv = String::from("Products,HSN,Price\n");
    for i in 0..1000 {
        csv.push_str(&format!("Product {i},7318,{}.50\n", i + 1));
    }
    c.bench_function("import_products_1000_rows", |b| {
        b.iter(|| black_box(sheet::import_products(black_box(&csv), &[])));
    });
}

criterion_group!(
    benches,
    bench_build_invoice,
    bench_recalculate,
    bench_buyer_switch,
    bench_to_words,
    bench_validate,
    bench_gstin,
    bench_layout,
    bench_pdf,
    bench_json,
    bench_register_export,
    bench_product_import,
);
criterion_main!(benches);
