//! vCard test fixtures.
//!
//! Shapes taken from RFC 6350 and from real phone and mail client exports.

/// RFC 6350 §7 - Author's vCard example
pub const VCARD_AUTHOR: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
BDAY:--0203\r\n\
GENDER:M\r\n\
LANG;PREF=1:fr\r\n\
LANG;PREF=2:en\r\n\
ORG;TYPE=work:Viagenie\r\n\
TEL;VALUE=uri;TYPE=work,voice;PREF=1:tel:+1-418-656-9254;ext=102\r\n\
EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
URL;TYPE=home:http://nomis80.org\r\n\
END:VCARD\r\n";

/// Android contacts export, vCard 2.1 with a quoted-printable soft break.
/// The NOTE continuation is not indented; the PHOTO continuation is.
pub const VCARD_ANDROID_21: &str = "\
BEGIN:VCARD\n\
VERSION:2.1\n\
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=C5=9Eahin;Mehmet;;;\n\
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Mehmet =C5=9Eahin\n\
TEL;CELL:+905551234567\n\
TEL;HOME:+902121234567\n\
NOTE;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=C4=B0stanbul Teknik =C3=9Cniversitesi =\n\
mezunu\n\
PHOTO;ENCODING=BASE64;JPEG:aGVsbG8gd29y\n\
\x20bGQ=\n\
\n\
END:VCARD\n";

/// Apple Contacts export with grouped properties.
pub const VCARD_APPLE_30: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
PRODID:-//Apple Inc.//macOS 14.0//EN\r\n\
N:Appleseed;Johnny;;;\r\n\
FN:Johnny Appleseed\r\n\
ORG:Apple Inc.;\r\n\
item1.EMAIL;type=INTERNET;type=pref:johnny@example.com\r\n\
item1.X-ABLabel:_$!<Other>!$_\r\n\
TEL;type=CELL;type=VOICE;type=pref:(555) 555-1212\r\n\
item2.ADR;type=HOME;type=pref:;;1 Infinite Loop;Cupertino;CA;95014;USA\r\n\
item2.X-ABADR:us\r\n\
END:VCARD\r\n";

/// Two cards with different property sets.
pub const VCARD_PAIR: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Jane Doe\r\n\
EMAIL:jane@x.com\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Bob\r\n\
TEL:555-1234\r\n\
END:VCARD\r\n";
