//! Fuente de datos ficticios en español para nombres, calles y correos.

use rand::seq::SliceRandom;
use rand::Rng;

const STREET_PREFIXES: &[&str] = &[
    "Calle",
    "Avenida",
    "Carrera",
    "Paseo",
    "Camino",
    "Plaza",
    "Ronda",
    "Via",
    "Transversal",
    "Diagonal",
];

const STREET_NAMES: &[&str] = &[
    "de Alcala",
    "del Prado",
    "de la Libertad",
    "de los Olivos",
    "Mayor",
    "de San Martin",
    "de la Paz",
    "del Sol",
    "de Bolivar",
    "de las Flores",
    "del Rio",
    "de Santander",
    "Real",
    "de la Esperanza",
    "de los Andes",
];

const FIRST_NAMES: &[&str] = &[
    "alejandro", "maria", "carlos", "lucia", "javier", "sofia", "andres", "valentina",
    "diego", "camila", "fernando", "isabel", "pablo", "daniela", "miguel", "paula",
];

const LAST_NAMES: &[&str] = &[
    "Garcia", "Rodriguez", "Martinez", "Lopez", "Gonzalez", "Perez", "Sanchez", "Ramirez",
    "Torres", "Flores", "Rivera", "Gomez", "Diaz", "Morales", "Ortiz", "Castillo", "Ruiz",
    "Herrera", "Jimenez", "Vargas", "Rojas", "Moreno", "Munoz", "Navarro",
];

const MAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "correo.com",
    "empresa.co",
];

pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

pub fn street_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, STREET_PREFIXES), pick(rng, STREET_NAMES))
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let user = format!(
        "{}.{}{}",
        pick(rng, FIRST_NAMES),
        pick(rng, LAST_NAMES).to_lowercase(),
        rng.gen_range(1..=99)
    );
    format!("{}@{}", user, pick(rng, MAIL_DOMAINS))
}
