use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Categorías de producto con su lista fija de productos y rango de precios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Dulces")]
    Sweets,
    #[serde(rename = "Carnes")]
    Meats,
    #[serde(rename = "Frutas")]
    Fruits,
    #[serde(rename = "Bebidas")]
    Beverages,
    #[serde(rename = "Lacteos")]
    Dairy,
    #[serde(rename = "Granos")]
    Grains,
    #[serde(rename = "Aseo")]
    Cleaning,
    #[serde(rename = "Panaderia")]
    Bakery,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sweets,
        Category::Meats,
        Category::Fruits,
        Category::Beverages,
        Category::Dairy,
        Category::Grains,
        Category::Cleaning,
        Category::Bakery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Sweets => "Dulces",
            Category::Meats => "Carnes",
            Category::Fruits => "Frutas",
            Category::Beverages => "Bebidas",
            Category::Dairy => "Lacteos",
            Category::Grains => "Granos",
            Category::Cleaning => "Aseo",
            Category::Bakery => "Panaderia",
        }
    }

    pub fn products(self) -> &'static [&'static str] {
        match self {
            Category::Sweets => &[
                "Chocolatina Jet",
                "Bon Bon Bum",
                "Chocoramo",
                "Galletas Ducales",
                "Chocolatina Jumbo",
                "Choclitos",
                "Nucita",
                "Gomitas Trululu",
                "Colombina",
                "Wafer Cream",
                "Masmelos",
            ],
            Category::Meats => &[
                "Lomo de res",
                "Pechuga de pollo",
                "Carne molida",
                "Costillas de cerdo",
                "Chuleta ahumada",
                "Chorizo",
                "Punta de anca",
                "Sobrebarriga",
                "Lomo de cerdo",
                "Pollo entero",
            ],
            Category::Fruits => &[
                "Banano",
                "Manzana",
                "Papaya",
                "Mango",
                "Guayaba",
                "Lulo",
                "Maracuya",
                "Mora",
                "Fresa",
                "Naranja",
                "Mandarina",
                "Piña",
                "Sandia",
            ],
            Category::Beverages => &[
                "Gaseosa Colombiana",
                "Postobon Manzana",
                "Agua Cristal",
                "Jugos Hit",
                "Pony Malta",
                "Cafe Juan Valdez",
                "Te Hatsu",
                "Cerveza Aguila",
                "Colombiana",
                "Coca-Cola",
                "Jugo de naranja natural",
            ],
            Category::Dairy => &[
                "Leche Alpina",
                "Yogurt Alpina",
                "Queso campesino",
                "Kumis",
                "Arequipe Alpina",
                "Mantequilla",
                "Queso mozzarella",
                "Crema de leche",
            ],
            Category::Grains => &[
                "Arroz Diana",
                "Frijol cargamanto",
                "Lentejas",
                "Garbanzos",
                "Arveja verde",
                "Maiz pira",
                "Quinua",
            ],
            Category::Cleaning => &[
                "Jabon Fab",
                "Detergente Ace",
                "Suavitel",
                "Desinfectante",
                "Papel higienico",
                "Jabon de tocador",
                "Limpiador Mr Musculo",
            ],
            Category::Bakery => &[
                "Pan tajado Bimbo",
                "Pandebono",
                "Pan Frances",
                "Mogolla",
                "Pan integral",
                "Croissant",
                "Pan de queso",
            ],
        }
    }

    /// Rango de precio unitario (pesos, inclusivo).
    pub fn price_range(self) -> RangeInclusive<u32> {
        match self {
            Category::Sweets => 800..=3000,
            Category::Meats => 15000..=35000,
            Category::Fruits => 2000..=8000,
            Category::Beverages => 1500..=5000,
            Category::Dairy => 3000..=12000,
            Category::Grains => 2000..=8000,
            Category::Cleaning => 5000..=15000,
            Category::Bakery => 1000..=4000,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_product_shortlist() {
        for category in Category::ALL {
            let count = category.products().len();
            assert!((3..=13).contains(&count), "{} tiene {} productos", category, count);
        }
        assert_eq!(Category::Fruits.products().len(), 13);
        assert_eq!(Category::Grains.products().len(), 7);
    }

    #[test]
    fn labels_match_serialized_names() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.label());

            let back: Category = serde_json::from_value(json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn price_ranges_are_positive() {
        for category in Category::ALL {
            assert!(*category.price_range().start() > 0);
        }
        assert_eq!(Category::Meats.price_range(), 15000..=35000);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result: Result<Category, _> = serde_json::from_str("\"Juguetes\"");
        assert!(result.is_err());
    }
}
