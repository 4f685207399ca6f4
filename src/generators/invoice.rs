use chrono::{Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use super::fake::{self, pick};
use crate::models::{Category, Client, Company, Invoice, LineItem};

const COMPANY_NAMES: &[&str] = &[
    "Distribuidora La Esperanza S.A.S",
    "Comercializadora El Trigal Ltda",
    "Supermercados La Canasta S.A",
    "Distribuciones El Ahorro",
    "Almacenes La Rebaja S.A.S",
    "Mayorista San Andresito",
    "Distribuidora El Exito Ltda",
];

const CITIES: &[&str] = &[
    "Bogota",
    "Medellin",
    "Cali",
    "Barranquilla",
    "Cartagena",
    "Bucaramanga",
    "Pereira",
    "Manizales",
    "Ibague",
    "Cucuta",
];

const BUSINESS_TYPES: &[&str] = &[
    "Supermercado",
    "Tienda",
    "Minimercado",
    "Drogueria",
    "Restaurante",
    "Cafeteria",
    "Panaderia",
];

pub const MIN_LINE_ITEMS: usize = 3;
pub const MAX_LINE_ITEMS: usize = Category::ALL.len();

const COUNTRY_PREFIX: &str = "+57";

/// Generador de facturas con datos sintéticos en español.
#[derive(Debug, Default, Clone)]
pub struct InvoiceGenerator;

impl InvoiceGenerator {
    pub fn new() -> Self {
        InvoiceGenerator
    }

    /// Genera una factura completa con fecha de hoy.
    pub fn generate(&self, invoice_number: &str) -> Invoice {
        let today = Local::now().date_naive();
        self.generate_with(&mut rand::thread_rng(), invoice_number, today)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        invoice_number: &str,
        issue_date: NaiveDate,
    ) -> Invoice {
        let company = self.company(rng);
        let client = self.client(rng);
        let items = self.line_items(rng, None);

        tracing::debug!(
            numero_factura = %invoice_number,
            productos = items.len(),
            "Factura sintetica ensamblada"
        );

        Invoice::new(invoice_number.to_string(), issue_date, company, client, items)
    }

    pub fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> Company {
        Company {
            name: pick(rng, COMPANY_NAMES).to_string(),
            address: address(rng),
            phone: phone(rng),
            email: fake::email(rng),
        }
    }

    pub fn client<R: Rng + ?Sized>(&self, rng: &mut R) -> Client {
        let business_type = pick(rng, BUSINESS_TYPES);
        let name = format!("{} {}", business_type, fake::last_name(rng));

        Client {
            name,
            address: address(rng),
            phone: phone(rng),
        }
    }

    /// Elige categorías sin repetir y un producto por categoría.
    ///
    /// Sin `count` se eligen entre 3 y 8 categorías; un `count` explícito se
    /// limita a `1..=8`.
    pub fn line_items<R: Rng + ?Sized>(&self, rng: &mut R, count: Option<usize>) -> Vec<LineItem> {
        let count = match count {
            Some(count) => count.clamp(1, MAX_LINE_ITEMS),
            None => rng.gen_range(MIN_LINE_ITEMS..=MAX_LINE_ITEMS),
        };

        let categories: Vec<Category> = Category::ALL.choose_multiple(rng, count).copied().collect();

        categories
            .into_iter()
            .map(|category| LineItem {
                product: pick(rng, category.products()).to_string(),
                category,
                quantity: rng.gen_range(1..=20),
                unit_price: f64::from(rng.gen_range(category.price_range())),
            })
            .collect()
    }
}

fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let street = fake::street_name(rng);
    let city = pick(rng, CITIES);
    format!(
        "{} #{}-{}, {}",
        street,
        rng.gen_range(10..=99),
        rng.gen_range(10..=99),
        city
    )
}

fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {} {}",
        COUNTRY_PREFIX,
        rng.gen_range(300..=321),
        rng.gen_range(100..=999),
        rng.gen_range(1000..=9999)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{round_to, TAX_RATE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    }

    #[test]
    fn generated_invoices_keep_arithmetic_invariants() {
        let generator = InvoiceGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for i in 0..200 {
            let invoice = generator.generate_with(&mut rng, &format!("FAC-{}", i), date());

            let expected_subtotal: f64 = invoice
                .items
                .iter()
                .map(|item| f64::from(item.quantity) * item.unit_price)
                .sum();
            assert_eq!(invoice.subtotal, expected_subtotal);
            assert!((invoice.tax - round_to(invoice.subtotal * TAX_RATE, 2)).abs() < 0.01);
            assert!((invoice.total - (invoice.subtotal + invoice.tax)).abs() < 0.01);
            assert!(invoice.validate().is_ok());
        }
    }

    #[test]
    fn line_items_respect_category_rules() {
        let generator = InvoiceGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let items = generator.line_items(&mut rng, None);
            assert!((MIN_LINE_ITEMS..=MAX_LINE_ITEMS).contains(&items.len()));

            let distinct: HashSet<Category> = items.iter().map(|item| item.category).collect();
            assert_eq!(distinct.len(), items.len());

            for item in &items {
                assert!((1..=20).contains(&item.quantity));
                assert!(item.category.products().contains(&item.product.as_str()));
                let range = item.category.price_range();
                assert!(item.unit_price >= f64::from(*range.start()));
                assert!(item.unit_price <= f64::from(*range.end()));
                assert_eq!(item.unit_price.fract(), 0.0);
            }
        }
    }

    #[test]
    fn explicit_count_is_honored_and_clamped() {
        let generator = InvoiceGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(generator.line_items(&mut rng, Some(5)).len(), 5);
        assert_eq!(generator.line_items(&mut rng, Some(0)).len(), 1);
        assert_eq!(generator.line_items(&mut rng, Some(20)).len(), MAX_LINE_ITEMS);
    }

    #[test]
    fn company_fields_follow_formats() {
        let generator = InvoiceGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let company = generator.company(&mut rng);
            assert!(COMPANY_NAMES.contains(&company.name.as_str()));
            assert!(company.email.contains('@'));

            let (street, city) = company.address.rsplit_once(", ").unwrap();
            assert!(CITIES.contains(&city));
            let numbers = street.rsplit_once('#').unwrap().1;
            let (a, b) = numbers.split_once('-').unwrap();
            assert!((10..=99).contains(&a.parse::<u32>().unwrap()));
            assert!((10..=99).contains(&b.parse::<u32>().unwrap()));

            let groups: Vec<&str> = company.phone.split(' ').collect();
            assert_eq!(groups.len(), 4);
            assert_eq!(groups[0], "+57");
            assert!((300..=321).contains(&groups[1].parse::<u32>().unwrap()));
            assert_eq!(groups[2].len(), 3);
            assert_eq!(groups[3].len(), 4);
        }
    }

    #[test]
    fn client_name_starts_with_business_type() {
        let generator = InvoiceGenerator::new();
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..50 {
            let client = generator.client(&mut rng);
            let (business_type, surname) = client.name.split_once(' ').unwrap();
            assert!(BUSINESS_TYPES.contains(&business_type));
            assert!(!surname.is_empty());
            assert!(client.phone.starts_with("+57 "));
        }
    }

    #[test]
    fn generate_echoes_invoice_number() {
        let invoice = InvoiceGenerator::new().generate("TEST-001");

        assert_eq!(invoice.number, "TEST-001");
        assert!(invoice.subtotal > 0.0);
        assert!(invoice.tax > 0.0);
        assert!(invoice.total > 0.0);
        assert!(!invoice.items.is_empty());
    }
}
