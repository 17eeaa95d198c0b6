//! Форматирование цен для карточек и фильтра

/// Неразрывный пробел, как в `toLocaleString("ru-RU")`
const THOUSANDS_SEPARATOR: char = '\u{a0}';

/// Форматирует целое число с разделителем тысяч
///
/// # Примеры
///
/// ```ignore
/// assert_eq!(format_thousands(1234567), "1\u{a0}234\u{a0}567");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();

    // Вставляем разделитель каждые 3 цифры с конца
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(THOUSANDS_SEPARATOR);
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Цена в рублях: "125 000 ₽"
pub fn format_price(value: u32) -> String {
    format!("{} ₽", format_thousands(u64::from(value)))
}

/// Склонение слова после числа: 1 модель, 2 модели, 5 моделей
pub fn plural_ru<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n100 = n % 100;
    let n10 = n % 10;
    if (11..=14).contains(&n100) {
        many
    } else if n10 == 1 {
        one
    } else if (2..=4).contains(&n10) {
        few
    } else {
        many
    }
}
