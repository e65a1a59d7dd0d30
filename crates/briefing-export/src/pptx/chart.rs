//! Native chart parts (`ppt/charts/chartN.xml`).
//!
//! Data is written as literal caches (`c:strLit` / `c:numLit`), so the part
//! needs no embedded workbook.

use std::fmt;
use std::io::{self, Write};

use briefing_core::models::visual::BarChart;
use briefing_core::theme::Rgb;

use super::xml::{DECLARATION, NS_A, NS_C, NS_R, escape};

const CATEGORY_AXIS_ID: u32 = 1;
const VALUE_AXIS_ID: u32 = 2;

/// The chart could not take an explicit fill for a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillUnsupported {
    pub reason: String,
}

impl fmt::Display for FillUnsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// A clustered column chart with per-series fills.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPart {
    chart: BarChart,
    fills: Vec<Option<Rgb>>,
    text_color: Option<Rgb>,
}

impl ChartPart {
    pub fn clustered_columns(chart: &BarChart) -> Self {
        Self {
            chart: chart.clone(),
            fills: vec![None; chart.series.len()],
            text_color: None,
        }
    }

    pub fn with_text_color(mut self, color: Rgb) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.chart.series.iter().map(|s| s.name.as_str())
    }

    /// Give the series at `index` an explicit solid fill.
    pub fn set_series_fill(&mut self, index: usize, color: Rgb) -> Result<(), FillUnsupported> {
        match self.fills.get_mut(index) {
            Some(slot) => {
                *slot = Some(color);
                Ok(())
            }
            None => Err(FillUnsupported {
                reason: format!("chart has no series at index {index}"),
            }),
        }
    }

    pub fn write_xml<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{DECLARATION}")?;
        write!(
            w,
            r#"<c:chartSpace xmlns:c="{NS_C}" xmlns:a="{NS_A}" xmlns:r="{NS_R}">"#
        )?;
        write!(w, r#"<c:date1904 val="0"/><c:lang val="en-US"/><c:roundedCorners val="0"/>"#)?;

        write!(w, "<c:chart>")?;
        self.write_title(w, &self.chart.title, 1400)?;
        write!(w, r#"<c:autoTitleDeleted val="0"/>"#)?;

        write!(w, "<c:plotArea><c:layout/>")?;
        write!(w, "<c:barChart>")?;
        write!(
            w,
            r#"<c:barDir val="col"/><c:grouping val="clustered"/><c:varyColors val="0"/>"#
        )?;
        for (idx, series) in self.chart.series.iter().enumerate() {
            write!(w, r#"<c:ser><c:idx val="{idx}"/><c:order val="{idx}"/>"#)?;
            write!(w, "<c:tx><c:v>{}</c:v></c:tx>", escape(&series.name))?;
            if let Some(Some(fill)) = self.fills.get(idx) {
                write!(
                    w,
                    r#"<c:spPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></c:spPr>"#,
                    fill.to_hex()
                )?;
            }
            write!(w, r#"<c:invertIfNegative val="0"/>"#)?;
            self.write_categories(w)?;
            write_values(w, &series.values, self.chart.categories.len())?;
            write!(w, "</c:ser>")?;
        }
        write!(w, r#"<c:gapWidth val="150"/>"#)?;
        write!(w, r#"<c:axId val="{CATEGORY_AXIS_ID}"/><c:axId val="{VALUE_AXIS_ID}"/>"#)?;
        write!(w, "</c:barChart>")?;

        write!(w, "<c:catAx>")?;
        write!(w, r#"<c:axId val="{CATEGORY_AXIS_ID}"/>"#)?;
        write!(w, r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#)?;
        write!(w, r#"<c:delete val="0"/><c:axPos val="b"/>"#)?;
        self.write_title(w, &self.chart.category_axis_title, 1000)?;
        write!(w, r#"<c:numFmt formatCode="General" sourceLinked="0"/>"#)?;
        write!(
            w,
            r#"<c:majorTickMark val="out"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#
        )?;
        write!(w, r#"<c:crossAx val="{VALUE_AXIS_ID}"/><c:crosses val="autoZero"/>"#)?;
        write!(
            w,
            r#"<c:auto val="1"/><c:lblAlgn val="ctr"/><c:lblOffset val="100"/><c:noMultiLvlLbl val="0"/>"#
        )?;
        write!(w, "</c:catAx>")?;

        write!(w, "<c:valAx>")?;
        write!(w, r#"<c:axId val="{VALUE_AXIS_ID}"/>"#)?;
        write!(
            w,
            r#"<c:scaling><c:orientation val="minMax"/><c:max val="{}"/><c:min val="0"/></c:scaling>"#,
            self.chart.axis_max()
        )?;
        write!(w, r#"<c:delete val="0"/><c:axPos val="l"/><c:majorGridlines/>"#)?;
        self.write_title(w, &self.chart.value_axis_title, 1000)?;
        write!(w, r#"<c:numFmt formatCode="General" sourceLinked="0"/>"#)?;
        write!(
            w,
            r#"<c:majorTickMark val="out"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#
        )?;
        write!(w, r#"<c:crossAx val="{CATEGORY_AXIS_ID}"/><c:crosses val="autoZero"/>"#)?;
        write!(
            w,
            r#"<c:crossBetween val="between"/><c:majorUnit val="{}"/>"#,
            self.chart.axis_max() / 5.0
        )?;
        write!(w, "</c:valAx>")?;
        write!(w, "</c:plotArea>")?;

        write!(w, r#"<c:legend><c:legendPos val="t"/><c:overlay val="0"/></c:legend>"#)?;
        write!(w, r#"<c:plotVisOnly val="1"/><c:dispBlanksAs val="gap"/>"#)?;
        write!(w, "</c:chart>")?;
        write!(w, "</c:chartSpace>")
    }

    fn write_title<W: Write>(&self, w: &mut W, text: &str, size: u32) -> io::Result<()> {
        write!(w, "<c:title><c:tx><c:rich><a:bodyPr/><a:lstStyle/><a:p>")?;
        write!(w, r#"<a:pPr><a:defRPr sz="{size}" b="1"/></a:pPr>"#)?;
        write!(w, r#"<a:r><a:rPr lang="en-US" sz="{size}" b="1">"#)?;
        if let Some(color) = self.text_color {
            write!(w, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
        }
        write!(w, "</a:rPr><a:t>{}</a:t></a:r>", escape(text))?;
        write!(w, r#"</a:p></c:rich></c:tx><c:overlay val="0"/></c:title>"#)
    }

    fn write_categories<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let categories = &self.chart.categories;
        write!(w, r#"<c:cat><c:strLit><c:ptCount val="{}"/>"#, categories.len())?;
        for (idx, category) in categories.iter().enumerate() {
            write!(w, r#"<c:pt idx="{idx}"><c:v>{}</c:v></c:pt>"#, escape(category))?;
        }
        write!(w, "</c:strLit></c:cat>")
    }
}

fn write_values<W: Write>(w: &mut W, values: &[f64], count: usize) -> io::Result<()> {
    write!(
        w,
        r#"<c:val><c:numLit><c:formatCode>General</c:formatCode><c:ptCount val="{count}"/>"#
    )?;
    for (idx, value) in values.iter().take(count).enumerate() {
        write!(w, r#"<c:pt idx="{idx}"><c:v>{value}</c:v></c:pt>"#)?;
    }
    write!(w, "</c:numLit></c:val>")
}
