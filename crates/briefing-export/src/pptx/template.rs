//! Fixed package parts: slide master, the two layouts and the theme.
//!
//! The master carries the shared title and body frames; layouts inherit
//! them. Only the theme varies, since its color scheme comes from the
//! palette.

use std::io::{self, Write};

use briefing_core::theme::Palette;

use super::xml::{DECLARATION, NS_A, NS_P, NS_R};

const GROUP_PROPS: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

/// Empty group header every `p:spTree` starts with.
pub fn group_props() -> &'static str {
    GROUP_PROPS
}

pub fn slide_master_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(DECLARATION);
    xml.push_str(&format!(
        r#"<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#
    ));
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(GROUP_PROPS);
    xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder 1"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr><a:xfrm><a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/></a:xfrm>"#,
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr anchor="ctr"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        r#"<a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Text Placeholder 2"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr><a:xfrm><a:off x="457200" y="1371600"/><a:ext cx="8229600" cy="5029200"/></a:xfrm>"#,
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        r#"<a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
        r#"hlink="hlink" folHlink="folHlink"/>"#,
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/>"#,
        r#"<p:sldLayoutId id="2147483650" r:id="rId2"/></p:sldLayoutIdLst>"#,
        "<p:txStyles>",
        r#"<p:titleStyle><a:lvl1pPr algn="ctr"><a:defRPr sz="3200" b="1">"#,
        r#"<a:solidFill><a:schemeClr val="accent1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#,
        r#"<p:bodyStyle><a:lvl1pPr marL="0" indent="0"><a:spcBef><a:spcPts val="0"/></a:spcBef>"#,
        r#"<a:buNone/><a:defRPr sz="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:bodyStyle>"#,
        r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"</a:defRPr></a:lvl1pPr></p:otherStyle>"#,
        "</p:txStyles></p:sldMaster>",
    ));
    xml
}

/// Title slide layout: centered title and a subtitle frame.
pub fn title_layout_xml() -> String {
    layout_xml(
        "title",
        "Title Slide",
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="ctrTitle"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="685800" y="914400"/><a:ext cx="7772400" cy="1371600"/></a:xfrm></p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Subtitle 2"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="1371600" y="2514600"/><a:ext cx="6400800" cy="1752600"/></a:xfrm></p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:lstStyle><a:lvl1pPr algn="ctr"><a:defRPr/></a:lvl1pPr></a:lstStyle>"#,
            r#"<a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        ),
    )
}

/// Title-and-content layout: both frames inherited from the master.
pub fn content_layout_xml() -> String {
    layout_xml(
        "obj",
        "Title and Content",
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        ),
    )
}

fn layout_xml(kind: &str, name: &str, shapes: &str) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}" type="{kind}" preserve="1">"#,
            r#"<p:cSld name="{name}"><p:spTree>{group}{shapes}</p:spTree></p:cSld>"#,
            r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        ),
        decl = DECLARATION,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        kind = kind,
        name = name,
        group = GROUP_PROPS,
        shapes = shapes,
    )
}

/// Theme part whose color scheme is the palette.
pub fn write_theme<W: Write>(w: &mut W, palette: &Palette) -> io::Result<()> {
    let srgb = |slot: &str, hex: String| format!(r#"<a:{slot}><a:srgbClr val="{hex}"/></a:{slot}>"#);

    write!(w, "{DECLARATION}")?;
    write!(w, r#"<a:theme xmlns:a="{NS_A}" name="Briefing">"#)?;
    write!(w, r#"<a:themeElements><a:clrScheme name="Briefing">"#)?;
    for (slot, color) in [
        ("dk1", palette.neutral_dark),
        ("lt1", palette.white),
        ("dk2", palette.neutral_dark),
        ("lt2", palette.neutral_light),
        ("accent1", palette.primary),
        ("accent2", palette.accent),
        ("accent3", palette.success),
        ("accent4", palette.secondary_accent),
        ("accent5", palette.primary),
        ("accent6", palette.accent),
        ("hlink", palette.primary),
        ("folHlink", palette.secondary_accent),
    ] {
        write!(w, "{}", srgb(slot, color.to_hex()))?;
    }
    write!(w, "</a:clrScheme>")?;

    write!(
        w,
        concat!(
            r#"<a:fontScheme name="Briefing">"#,
            r#"<a:majorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>",
        )
    )?;

    write!(
        w,
        concat!(
            r#"<a:fmtScheme name="Briefing"><a:fillStyleLst>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            "</a:fillStyleLst><a:lnStyleLst>",
            r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            "</a:lnStyleLst><a:effectStyleLst>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "</a:effectStyleLst><a:bgFillStyleLst>",
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            "</a:bgFillStyleLst></a:fmtScheme>",
        )
    )?;
    write!(w, "</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>")
}
