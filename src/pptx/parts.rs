//! Fixed and templated parts of the PresentationML package.
//!
//! A `.pptx` file is a zip of XML parts wired together by relationship
//! files. Everything here is boilerplate shared by every deck we produce:
//! one slide master, one blank layout, one theme. The per-slide parts live
//! in [`super::slide`].

use quick_xml::escape::escape;

pub(crate) const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// DrawingML / PresentationML / relationship namespace triple carried by
/// every drawing part.
pub(crate) const NS_TRIPLE: &str = "xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\"";

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Package-level relationships: the presentation part and document
/// properties.
pub(crate) fn root_rels() -> String {
    format!(
        "{XML_DECL}\n<Relationships xmlns=\"{REL_NS}\">\
<Relationship Id=\"rId1\" Type=\"{REL_TYPE_BASE}/officeDocument\" Target=\"ppt/presentation.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
<Relationship Id=\"rId3\" Type=\"{REL_TYPE_BASE}/extended-properties\" Target=\"docProps/app.xml\"/>\
</Relationships>"
    )
}

pub(crate) fn content_types(slide_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push_str("\n<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">");
    xml.push_str("<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>");
    xml.push_str("<Default Extension=\"xml\" ContentType=\"application/xml\"/>");

    let overrides = [
        ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
        ("/ppt/presProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"),
        ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ];
    for (part, content_type) in overrides {
        xml.push_str(&format!(
            "<Override PartName=\"{part}\" ContentType=\"{content_type}\"/>"
        ));
    }
    for index in 1..=slide_count {
        xml.push_str(&format!(
            "<Override PartName=\"/ppt/slides/slide{index}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
        ));
    }
    xml.push_str("</Types>");
    xml
}

/// The presentation part: master list, slide list, slide size.
///
/// Slide size is 13.333" x 7.5" (16:9), matching the geometry constants in
/// [`super::slide`].
pub(crate) fn presentation(slide_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push_str(&format!("\n<p:presentation {NS_TRIPLE}>"));
    xml.push_str("<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>");
    xml.push_str("<p:sldIdLst>");
    for index in 0..slide_count {
        // Slide ids must be >= 256; relationship ids follow the master.
        xml.push_str(&format!(
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            256 + index,
            2 + index
        ));
    }
    xml.push_str("</p:sldIdLst>");
    xml.push_str("<p:sldSz cx=\"12192000\" cy=\"6858000\"/>");
    xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
    xml.push_str("</p:presentation>");
    xml
}

pub(crate) fn presentation_rels(slide_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push_str(&format!("\n<Relationships xmlns=\"{REL_NS}\">"));
    xml.push_str(&format!(
        "<Relationship Id=\"rId1\" Type=\"{REL_TYPE_BASE}/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>"
    ));
    for index in 0..slide_count {
        xml.push_str(&format!(
            "<Relationship Id=\"rId{}\" Type=\"{REL_TYPE_BASE}/slide\" Target=\"slides/slide{}.xml\"/>",
            2 + index,
            1 + index
        ));
    }
    xml.push_str(&format!(
        "<Relationship Id=\"rId{}\" Type=\"{REL_TYPE_BASE}/presProps\" Target=\"presProps.xml\"/>",
        2 + slide_count
    ));
    xml.push_str(&format!(
        "<Relationship Id=\"rId{}\" Type=\"{REL_TYPE_BASE}/theme\" Target=\"theme/theme1.xml\"/>",
        3 + slide_count
    ));
    xml.push_str("</Relationships>");
    xml
}

pub(crate) fn pres_props() -> String {
    format!("{XML_DECL}\n<p:presentationPr {NS_TRIPLE}/>")
}

/// An empty shape tree: the non-visual group properties every `cSld`
/// requires, with no shapes.
pub(crate) const EMPTY_SP_TREE: &str = "<p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr></p:spTree>";

pub(crate) fn slide_master() -> String {
    format!(
        "{XML_DECL}\n<p:sldMaster {NS_TRIPLE}>\
<p:cSld>{EMPTY_SP_TREE}</p:cSld>\
<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
</p:sldMaster>"
    )
}

pub(crate) fn slide_master_rels() -> String {
    format!(
        "{XML_DECL}\n<Relationships xmlns=\"{REL_NS}\">\
<Relationship Id=\"rId1\" Type=\"{REL_TYPE_BASE}/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
<Relationship Id=\"rId2\" Type=\"{REL_TYPE_BASE}/theme\" Target=\"../theme/theme1.xml\"/>\
</Relationships>"
    )
}

/// The single blank layout used as a canvas for manual text-box placement.
pub(crate) fn slide_layout() -> String {
    format!(
        "{XML_DECL}\n<p:sldLayout {NS_TRIPLE} type=\"blank\" preserve=\"1\">\
<p:cSld name=\"Blank\">{EMPTY_SP_TREE}</p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sldLayout>"
    )
}

pub(crate) fn slide_layout_rels() -> String {
    format!(
        "{XML_DECL}\n<Relationships xmlns=\"{REL_NS}\">\
<Relationship Id=\"rId1\" Type=\"{REL_TYPE_BASE}/slideMaster\" Target=\"../slideMasters/slideMaster1.xml\"/>\
</Relationships>"
    )
}

/// Every slide references the one blank layout.
pub(crate) fn slide_rels() -> String {
    format!(
        "{XML_DECL}\n<Relationships xmlns=\"{REL_NS}\">\
<Relationship Id=\"rId1\" Type=\"{REL_TYPE_BASE}/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
</Relationships>"
    )
}

pub(crate) fn core_props(title: &str) -> String {
    format!(
        "{XML_DECL}\n<cp:coreProperties \
xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
xmlns:dcterms=\"http://purl.org/dc/terms/\" \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
<dc:title>{}</dc:title>\
<cp:revision>1</cp:revision>\
</cp:coreProperties>",
        escape(title)
    )
}

pub(crate) fn app_props(slide_count: usize) -> String {
    format!(
        "{XML_DECL}\n<Properties \
xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
<Application>mdeck</Application>\
<Slides>{slide_count}</Slides>\
</Properties>"
    )
}

/// Minimal Office theme. The master's color map and our explicit run
/// properties do the real styling; this part just has to be schema-valid.
pub(crate) fn theme() -> String {
    let fills = "<a:fillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:fillStyleLst>";
    let lines = "<a:lnStyleLst><a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln><a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln><a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln></a:lnStyleLst>";
    let effects = "<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>";
    let bg_fills = "<a:bgFillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:bgFillStyleLst>";

    format!(
        "{XML_DECL}\n<a:theme xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" name=\"mdeck\">\
<a:themeElements>\
<a:clrScheme name=\"mdeck\">\
<a:dk1><a:srgbClr val=\"111417\"/></a:dk1>\
<a:lt1><a:srgbClr val=\"F8FAFC\"/></a:lt1>\
<a:dk2><a:srgbClr val=\"111417\"/></a:dk2>\
<a:lt2><a:srgbClr val=\"F8FAFC\"/></a:lt2>\
<a:accent1><a:srgbClr val=\"FF0000\"/></a:accent1>\
<a:accent2><a:srgbClr val=\"FF0000\"/></a:accent2>\
<a:accent3><a:srgbClr val=\"FF0000\"/></a:accent3>\
<a:accent4><a:srgbClr val=\"FF0000\"/></a:accent4>\
<a:accent5><a:srgbClr val=\"FF0000\"/></a:accent5>\
<a:accent6><a:srgbClr val=\"FF0000\"/></a:accent6>\
<a:hlink><a:srgbClr val=\"FF0000\"/></a:hlink>\
<a:folHlink><a:srgbClr val=\"FF0000\"/></a:folHlink>\
</a:clrScheme>\
<a:fontScheme name=\"mdeck\">\
<a:majorFont><a:latin typeface=\"Montserrat\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
<a:minorFont><a:latin typeface=\"Open Sans\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
</a:fontScheme>\
<a:fmtScheme name=\"mdeck\">{fills}{lines}{effects}{bg_fills}</a:fmtScheme>\
</a:themeElements>\
</a:theme>"
    )
}
