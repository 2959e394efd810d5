//! Supported currencies.

/// A currency as shown in the pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

const fn entry(code: &'static str, name: &'static str, symbol: &'static str, flag: &'static str) -> CurrencyEntry {
    CurrencyEntry {
        code,
        name,
        symbol,
        flag,
    }
}

pub static CURRENCIES: &[CurrencyEntry] = &[
    entry("USD", "US Dollar", "$", "🇺🇸"),
    entry("EUR", "Euro", "€", "🇪🇺"),
    entry("GBP", "British Pound", "£", "🇬🇧"),
    entry("INR", "Indian Rupee", "₹", "🇮🇳"),
    entry("CAD", "Canadian Dollar", "C$", "🇨🇦"),
    entry("JPY", "Japanese Yen", "¥", "🇯🇵"),
    entry("AUD", "Australian Dollar", "A$", "🇦🇺"),
    entry("AED", "UAE Dirham", "د.إ", "🇦🇪"),
    entry("CHF", "Swiss Franc", "Fr", "🇨🇭"),
    entry("CNY", "Chinese Yuan", "¥", "🇨🇳"),
    entry("NZD", "New Zealand Dollar", "NZ$", "🇳🇿"),
    entry("SGD", "Singapore Dollar", "S$", "🇸🇬"),
    entry("HKD", "Hong Kong Dollar", "HK$", "🇭🇰"),
    entry("SEK", "Swedish Krona", "kr", "🇸🇪"),
    entry("KRW", "South Korean Won", "₩", "🇰🇷"),
    entry("BRL", "Brazilian Real", "R$", "🇧🇷"),
    entry("ZAR", "South African Rand", "R", "🇿🇦"),
    entry("MXN", "Mexican Peso", "$", "🇲🇽"),
    entry("RUB", "Russian Ruble", "₽", "🇷🇺"),
    entry("TRY", "Turkish Lira", "₺", "🇹🇷"),
    entry("THB", "Thai Baht", "฿", "🇹🇭"),
    entry("IDR", "Indonesian Rupiah", "Rp", "🇮🇩"),
    entry("MYR", "Malaysian Ringgit", "RM", "🇲🇾"),
    entry("PHP", "Philippine Peso", "₱", "🇵🇭"),
    entry("ILS", "Israeli New Shekel", "₪", "🇮🇱"),
    entry("DKK", "Danish Krone", "kr", "🇩🇰"),
    entry("NOK", "Norwegian Krone", "kr", "🇳🇴"),
    entry("PLN", "Polish Zloty", "zł", "🇵🇱"),
    entry("CZK", "Czech Koruna", "Kč", "🇨🇿"),
    entry("HUF", "Hungarian Forint", "Ft", "🇭🇺"),
    entry("SAR", "Saudi Riyal", "﷼", "🇸🇦"),
    entry("QAR", "Qatari Rial", "﷼", "🇶🇦"),
    entry("KWD", "Kuwaiti Dinar", "د.ك", "🇰🇼"),
    entry("EGP", "Egyptian Pound", "E£", "🇪🇬"),
    entry("VND", "Vietnamese Dong", "₫", "🇻🇳"),
    entry("TWD", "New Taiwan Dollar", "NT$", "🇹🇼"),
];

/// Look up a currency by ISO code (case-insensitive).
pub fn find_currency(code: &str) -> Option<&'static CurrencyEntry> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Currencies whose code or name contains `query`, in table order. An empty
/// query returns the whole table.
pub fn filter_currencies(query: &str) -> Vec<&'static CurrencyEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CURRENCIES.iter().collect();
    }
    CURRENCIES
        .iter()
        .filter(|c| c.code.to_lowercase().contains(&needle) || c.name.to_lowercase().contains(&needle))
        .collect()
}
