use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::models::{Item, Receipt};

/// 金额字符串允许的最大小数位/指数绝对值, 超出视为解析失败
const MAX_AMOUNT_EXPONENT: u64 = 32;
const MAX_AMOUNT_LEN: usize = 64;

const ROUND_DOLLAR_POINTS: i64 = 50;
const QUARTER_MULTIPLE_POINTS: i64 = 25;
const ITEM_PAIR_POINTS: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;

/// 计算小票总积分 (各规则独立累加)
///
/// 任一字段解析失败只令对应规则得 0 分, 不影响其余规则。
pub fn compute_score(receipt: &Receipt) -> i64 {
    retailer_name_points(&receipt.retailer)
        + round_dollar_points(&receipt.total)
        + quarter_multiple_points(&receipt.total)
        + item_pair_points(&receipt.items)
        + description_points(&receipt.items)
        + odd_day_points(&receipt.purchase_date)
        + afternoon_points(&receipt.purchase_time)
}

/// 零售商名称中每个字母/数字得 1 分
pub fn retailer_name_points(retailer: &str) -> i64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64
}

/// 总额为整数美元得 50 分
pub fn round_dollar_points(total: &str) -> i64 {
    match parse_amount(total) {
        Some(total) if total.is_integer() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

/// 总额为 0.25 的非零倍数得 25 分
pub fn quarter_multiple_points(total: &str) -> i64 {
    match parse_amount(total) {
        Some(total) if !total.is_zero() && (&total * &BigDecimal::from(4)).is_integer() => {
            QUARTER_MULTIPLE_POINTS
        }
        _ => 0,
    }
}

/// 每两件商品得 5 分
pub fn item_pair_points(items: &[Item]) -> i64 {
    (items.len() / 2) as i64 * ITEM_PAIR_POINTS
}

pub fn description_points(items: &[Item]) -> i64 {
    items.iter().map(item_description_points).sum()
}

/// 去除首尾空白后描述长度为 3 的非零倍数时, 得 ceil(price * 0.2) 分
pub fn item_description_points(item: &Item) -> i64 {
    let len = item.short_description.trim().len();
    if len == 0 || len % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        tracing::debug!("Unparseable item price {:?}, scoring 0", item.price);
        return 0;
    };

    let fifth = BigDecimal::new(2.into(), 1);
    ceil_to_i64(&(&price * &fifth)).map_or(0, |points| points.max(0))
}

/// 购买日期为奇数日得 6 分
pub fn odd_day_points(purchase_date: &str) -> i64 {
    if !is_date_shaped(purchase_date) {
        tracing::debug!("Malformed purchase date {:?}, scoring 0", purchase_date);
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!("Unparseable purchase date {:?}: {}", purchase_date, e);
            0
        }
    }
}

/// 购买时间在 14:00 之后、16:00 之前 (14:01 - 15:59) 得 10 分
pub fn afternoon_points(purchase_time: &str) -> i64 {
    if !is_time_shaped(purchase_time) {
        tracing::debug!("Malformed purchase time {:?}, scoring 0", purchase_time);
        return 0;
    }

    let time = match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) => time,
        Err(e) => {
            tracing::debug!("Unparseable purchase time {:?}: {}", purchase_time, e);
            return 0;
        }
    };

    match (time.hour(), time.minute()) {
        (14, 1..) | (15, _) => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// YYYY-MM-DD, 月/日必须两位
fn is_date_shaped(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// H:MM 或 HH:MM, 分钟必须两位
fn is_time_shaped(raw: &str) -> bool {
    let Some((hour, minute)) = raw.split_once(':') else {
        return false;
    };
    matches!(hour.len(), 1 | 2)
        && minute.len() == 2
        && hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
}

/// 解析十进制金额字符串; 不做 trim, 超出合理范围返回 None
///
/// 指数部分必须在 BigDecimal 解析前校验, 否则极端指数会在其内部溢出。
fn parse_amount(raw: &str) -> Option<BigDecimal> {
    if raw.len() > MAX_AMOUNT_LEN {
        return None;
    }
    if let Some((_, exponent)) = raw.split_once(['e', 'E']) {
        let exponent: i64 = exponent.parse().ok()?;
        if exponent.unsigned_abs() > MAX_AMOUNT_EXPONENT {
            return None;
        }
    }

    let value: BigDecimal = raw.parse().ok()?;
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_AMOUNT_EXPONENT {
        return None;
    }
    Some(value)
}

fn ceil_to_i64(value: &BigDecimal) -> Option<i64> {
    let truncated = value.with_scale(0);
    let ceiling = if &truncated < value {
        truncated + BigDecimal::from(1)
    } else {
        truncated
    };
    ceiling.to_i64()
}
