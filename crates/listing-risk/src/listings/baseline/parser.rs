use super::normalizer::normalize_neighborhood;
use super::NeighborhoodAverages;
use crate::listings::assessment::normalizer::parse_price;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;

/// A CSV row, either usable or the reason it was left out.
pub(crate) type BaselineRecord = Result<(String, NeighborhoodAverages), RowRejection>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RowRejection {
    pub(crate) line: usize,
    pub(crate) reason: RejectionReason,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RejectionReason {
    MissingNeighborhood,
    MissingAverage(&'static str),
    InvalidAverage { column: &'static str, value: String },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MissingNeighborhood => write!(f, "neighborhood name is empty"),
            RejectionReason::MissingAverage(column) => write!(f, "{column} is empty"),
            RejectionReason::InvalidAverage { column, value } => {
                write!(f, "{column} '{value}' is not a positive number")
            }
        }
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<BaselineRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<BaselineRow>().enumerate() {
        let row = row?;
        // header occupies line 1
        let line = index + 2;
        records.push(row.into_record().map_err(|reason| RowRejection { line, reason }));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct BaselineRow {
    #[serde(rename = "동", alias = "neighborhood", default)]
    neighborhood: String,
    #[serde(
        rename = "평균보증금",
        alias = "average_deposit",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    average_deposit: Option<String>,
    #[serde(
        rename = "평균월세",
        alias = "average_rent",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    average_rent: Option<String>,
}

impl BaselineRow {
    fn into_record(self) -> Result<(String, NeighborhoodAverages), RejectionReason> {
        let neighborhood = normalize_neighborhood(&self.neighborhood);
        if neighborhood.is_empty() {
            return Err(RejectionReason::MissingNeighborhood);
        }

        let average_deposit = positive_average("평균보증금", self.average_deposit.as_deref())?;
        let average_rent = positive_average("평균월세", self.average_rent.as_deref())?;

        Ok((
            neighborhood,
            NeighborhoodAverages {
                average_deposit,
                average_rent,
            },
        ))
    }
}

fn positive_average(column: &'static str, value: Option<&str>) -> Result<f64, RejectionReason> {
    let value = value.ok_or(RejectionReason::MissingAverage(column))?;
    parse_price(value)
        .ok()
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| RejectionReason::InvalidAverage {
            column,
            value: value.to_string(),
        })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
