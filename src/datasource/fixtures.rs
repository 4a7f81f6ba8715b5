//! 占位数据集: mock 数据源的初始内容
//!
//! 发票按 date 降序排列, "最新发票"视图直接取序列前 5 条

use crate::models::{Customer, Invoice, Revenue};
use chrono::NaiveDate;

fn customer(id: &str, name: &str, email: &str, image_url: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        image_url: image_url.to_string(),
    }
}

fn invoice(id: &str, customer_id: &str, amount: i64, status: &str, date: NaiveDate) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        amount,
        status: status.to_string(),
        date,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date out of range")
}

pub fn customers() -> Vec<Customer> {
    vec![
        customer(
            "d6e15727-9fe1-45cb-a8b3-3587a3cd8381",
            "Delba de Oliveira",
            "delba@oliveira.com",
            "/customers/delba-de-oliveira.png",
        ),
        customer(
            "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            "Lee Robinson",
            "lee@robinson.com",
            "/customers/lee-robinson.png",
        ),
        customer(
            "76d65c26-f784-44a2-ac19-586678f7c2f2",
            "Michael Novotny",
            "michael@novotny.com",
            "/customers/michael-novotny.png",
        ),
        customer(
            "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
            "Amy Burns",
            "amy@burns.com",
            "/customers/amy-burns.png",
        ),
        customer(
            "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            "Balazs Orban",
            "balazs@orban.com",
            "/customers/balazs-orban.png",
        ),
        customer(
            "126eed9c-c90c-4ef6-a4a8-fcf7408d3c66",
            "Evil Rabbit",
            "evil@rabbit.com",
            "/customers/evil-rabbit.png",
        ),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        invoice(
            "550e8400-e29b-41d4-a716-446655440001",
            "126eed9c-c90c-4ef6-a4a8-fcf7408d3c66",
            15795,
            "pending",
            date(2023, 12, 6),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440002",
            "d6e15727-9fe1-45cb-a8b3-3587a3cd8381",
            20348,
            "pending",
            date(2023, 11, 14),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440003",
            "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
            3040,
            "paid",
            date(2023, 10, 29),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440004",
            "76d65c26-f784-44a2-ac19-586678f7c2f2",
            44800,
            "paid",
            date(2023, 9, 10),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440005",
            "d6e15727-9fe1-45cb-a8b3-3587a3cd8381",
            500,
            "paid",
            date(2023, 8, 19),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440006",
            "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            34577,
            "pending",
            date(2023, 8, 5),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440007",
            "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            54246,
            "pending",
            date(2023, 7, 16),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440008",
            "126eed9c-c90c-4ef6-a4a8-fcf7408d3c66",
            666,
            "pending",
            date(2023, 6, 27),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440009",
            "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
            1250,
            "paid",
            date(2023, 6, 17),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440010",
            "76d65c26-f784-44a2-ac19-586678f7c2f2",
            32545,
            "paid",
            date(2023, 6, 9),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440011",
            "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            8546,
            "paid",
            date(2023, 6, 7),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440012",
            "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            8945,
            "paid",
            date(2023, 6, 3),
        ),
        invoice(
            "550e8400-e29b-41d4-a716-446655440013",
            "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            1000,
            "paid",
            date(2022, 6, 5),
        ),
    ]
}

pub fn revenue() -> Vec<Revenue> {
    let months = [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ];
    months
        .iter()
        .map(|(month, revenue)| Revenue {
            month: month.to_string(),
            revenue: *revenue,
        })
        .collect()
}
