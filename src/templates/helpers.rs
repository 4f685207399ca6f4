use minijinja::Value;

/// Formatea un número con separadores de miles y decimales fijos.
pub fn format_number_with_separators(num: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", num, decimals = decimals);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Escapa caracteres con significado especial en el modo markup de Typst.
///
/// Un texto que empieza con `<dígitos>.` se leería como lista numerada, así que
/// ese punto también se escapa.
pub fn escape_typst(text: &str) -> String {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let enum_dot = (digits > 0 && text[digits..].starts_with('.')).then_some(digits);

    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '\\' | '#' | '$' | '@' | '*' | '_' | '[' | ']' | '<' | '>' | '`' | '~' | '/' | '=' | '-'
            | '+' | '"' | '\'' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '.' if enum_dot == Some(i) => escaped.push_str("\\."),
            _ => escaped.push(c),
        }
    }
    escaped
}

// Filtros

pub fn percentage_filter(value: Value) -> Result<Value, minijinja::Error> {
    let num = f64::try_from(value).map_err(|_| {
        minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            "Value must be a number",
        )
    })?;

    Ok(Value::from(format!("{}%", format_number_with_separators(num * 100.0, 0))))
}
