//! ISO 3166-1 country table with international calling codes
//!
//! Calling codes are digits only. Members of the North American Numbering
//! Plan all carry `1`; the area code is part of the national number.

use super::Status::{self, Assigned, Deleted, Reserved};

pub(super) type Row = (&'static str, &'static str, Status, &'static [&'static str]);

pub(super) const COUNTRIES: &[Row] = &[
    ("Afghanistan", "AF", Assigned, &["93"]),
    ("Åland Islands", "AX", Assigned, &["358"]),
    ("Albania", "AL", Assigned, &["355"]),
    ("Algeria", "DZ", Assigned, &["213"]),
    ("American Samoa", "AS", Assigned, &["1"]),
    ("Andorra", "AD", Assigned, &["376"]),
    ("Angola", "AO", Assigned, &["244"]),
    ("Anguilla", "AI", Assigned, &["1"]),
    ("Antarctica", "AQ", Assigned, &["672"]),
    ("Antigua And Barbuda", "AG", Assigned, &["1"]),
    ("Argentina", "AR", Assigned, &["54"]),
    ("Armenia", "AM", Assigned, &["374"]),
    ("Aruba", "AW", Assigned, &["297"]),
    ("Ascension Island", "AC", Reserved, &["247"]),
    ("Australia", "AU", Assigned, &["61"]),
    ("Austria", "AT", Assigned, &["43"]),
    ("Azerbaijan", "AZ", Assigned, &["994"]),
    ("Bahamas", "BS", Assigned, &["1"]),
    ("Bahrain", "BH", Assigned, &["973"]),
    ("Bangladesh", "BD", Assigned, &["880"]),
    ("Barbados", "BB", Assigned, &["1"]),
    ("Belarus", "BY", Assigned, &["375"]),
    ("Belgium", "BE", Assigned, &["32"]),
    ("Belize", "BZ", Assigned, &["501"]),
    ("Benin", "BJ", Assigned, &["229"]),
    ("Bermuda", "BM", Assigned, &["1"]),
    ("Bhutan", "BT", Assigned, &["975"]),
    ("Bolivia, Plurinational State Of", "BO", Assigned, &["591"]),
    ("Bonaire, Sint Eustatius And Saba", "BQ", Assigned, &["599"]),
    ("Bosnia & Herzegovina", "BA", Assigned, &["387"]),
    ("Botswana", "BW", Assigned, &["267"]),
    ("Bouvet Island", "BV", Assigned, &[]),
    ("Brazil", "BR", Assigned, &["55"]),
    ("British Indian Ocean Territory", "IO", Assigned, &["246"]),
    ("Brunei Darussalam", "BN", Assigned, &["673"]),
    ("Bulgaria", "BG", Assigned, &["359"]),
    ("Burkina Faso", "BF", Assigned, &["226"]),
    ("Burundi", "BI", Assigned, &["257"]),
    ("Cabo Verde", "CV", Assigned, &["238"]),
    ("Cambodia", "KH", Assigned, &["855"]),
    ("Cameroon", "CM", Assigned, &["237"]),
    ("Canada", "CA", Assigned, &["1"]),
    ("Cayman Islands", "KY", Assigned, &["1"]),
    ("Central African Republic", "CF", Assigned, &["236"]),
    ("Chad", "TD", Assigned, &["235"]),
    ("Chile", "CL", Assigned, &["56"]),
    ("China", "CN", Assigned, &["86"]),
    ("Christmas Island", "CX", Assigned, &["61"]),
    ("Cocos (Keeling) Islands", "CC", Assigned, &["61"]),
    ("Colombia", "CO", Assigned, &["57"]),
    ("Comoros", "KM", Assigned, &["269"]),
    ("Cook Islands", "CK", Assigned, &["682"]),
    ("Costa Rica", "CR", Assigned, &["506"]),
    ("Cote d'Ivoire", "CI", Assigned, &["225"]),
    ("Croatia", "HR", Assigned, &["385"]),
    ("Cuba", "CU", Assigned, &["53"]),
    ("Curacao", "CW", Assigned, &["599"]),
    ("Cyprus", "CY", Assigned, &["357"]),
    ("Czech Republic", "CZ", Assigned, &["420"]),
    ("Democratic Republic Of Congo", "CD", Assigned, &["243"]),
    ("Denmark", "DK", Assigned, &["45"]),
    ("Djibouti", "DJ", Assigned, &["253"]),
    ("Dominica", "DM", Assigned, &["1"]),
    ("Dominican Republic", "DO", Assigned, &["1"]),
    ("Ecuador", "EC", Assigned, &["593"]),
    ("Egypt", "EG", Assigned, &["20"]),
    ("El Salvador", "SV", Assigned, &["503"]),
    ("Equatorial Guinea", "GQ", Assigned, &["240"]),
    ("Eritrea", "ER", Assigned, &["291"]),
    ("Estonia", "EE", Assigned, &["372"]),
    ("Eswatini", "SZ", Assigned, &["268"]),
    ("Ethiopia", "ET", Assigned, &["251"]),
    ("European Union", "EU", Reserved, &["388"]),
    ("Falkland Islands", "FK", Assigned, &["500"]),
    ("Faroe Islands", "FO", Assigned, &["298"]),
    ("Fiji", "FJ", Assigned, &["679"]),
    ("Finland", "FI", Assigned, &["358"]),
    ("France", "FR", Assigned, &["33"]),
    ("French Guiana", "GF", Assigned, &["594"]),
    ("French Polynesia", "PF", Assigned, &["689"]),
    ("French Southern Territories", "TF", Assigned, &["262"]),
    ("Gabon", "GA", Assigned, &["241"]),
    ("Gambia", "GM", Assigned, &["220"]),
    ("Georgia", "GE", Assigned, &["995"]),
    ("Germany", "DE", Assigned, &["49"]),
    ("Ghana", "GH", Assigned, &["233"]),
    ("Gibraltar", "GI", Assigned, &["350"]),
    ("Greece", "GR", Assigned, &["30"]),
    ("Greenland", "GL", Assigned, &["299"]),
    ("Grenada", "GD", Assigned, &["1"]),
    ("Guadeloupe", "GP", Assigned, &["590"]),
    ("Guam", "GU", Assigned, &["1"]),
    ("Guatemala", "GT", Assigned, &["502"]),
    ("Guernsey", "GG", Assigned, &["44"]),
    ("Guinea", "GN", Assigned, &["224"]),
    ("Guinea-bissau", "GW", Assigned, &["245"]),
    ("Guyana", "GY", Assigned, &["592"]),
    ("Haiti", "HT", Assigned, &["509"]),
    ("Heard Island And McDonald Islands", "HM", Assigned, &[]),
    ("Honduras", "HN", Assigned, &["504"]),
    ("Hong Kong", "HK", Assigned, &["852"]),
    ("Hungary", "HU", Assigned, &["36"]),
    ("Iceland", "IS", Assigned, &["354"]),
    ("India", "IN", Assigned, &["91"]),
    ("Indonesia", "ID", Assigned, &["62"]),
    ("Iran, Islamic Republic Of", "IR", Assigned, &["98"]),
    ("Iraq", "IQ", Assigned, &["964"]),
    ("Ireland", "IE", Assigned, &["353"]),
    ("Isle Of Man", "IM", Assigned, &["44"]),
    ("Israel", "IL", Assigned, &["972"]),
    ("Italy", "IT", Assigned, &["39"]),
    ("Jamaica", "JM", Assigned, &["1"]),
    ("Japan", "JP", Assigned, &["81"]),
    ("Jersey", "JE", Assigned, &["44"]),
    ("Jordan", "JO", Assigned, &["962"]),
    ("Kazakhstan", "KZ", Assigned, &["7"]),
    ("Kenya", "KE", Assigned, &["254"]),
    ("Kiribati", "KI", Assigned, &["686"]),
    ("Korea, Democratic People's Republic Of", "KP", Assigned, &["850"]),
    ("Korea, Republic Of", "KR", Assigned, &["82"]),
    ("Kuwait", "KW", Assigned, &["965"]),
    ("Kyrgyzstan", "KG", Assigned, &["996"]),
    ("Lao People's Democratic Republic", "LA", Assigned, &["856"]),
    ("Latvia", "LV", Assigned, &["371"]),
    ("Lebanon", "LB", Assigned, &["961"]),
    ("Lesotho", "LS", Assigned, &["266"]),
    ("Liberia", "LR", Assigned, &["231"]),
    ("Libya", "LY", Assigned, &["218"]),
    ("Liechtenstein", "LI", Assigned, &["423"]),
    ("Lithuania", "LT", Assigned, &["370"]),
    ("Luxembourg", "LU", Assigned, &["352"]),
    ("Macao", "MO", Assigned, &["853"]),
    ("Madagascar", "MG", Assigned, &["261"]),
    ("Malawi", "MW", Assigned, &["265"]),
    ("Malaysia", "MY", Assigned, &["60"]),
    ("Maldives", "MV", Assigned, &["960"]),
    ("Mali", "ML", Assigned, &["223"]),
    ("Malta", "MT", Assigned, &["356"]),
    ("Marshall Islands", "MH", Assigned, &["692"]),
    ("Martinique", "MQ", Assigned, &["596"]),
    ("Mauritania", "MR", Assigned, &["222"]),
    ("Mauritius", "MU", Assigned, &["230"]),
    ("Mayotte", "YT", Assigned, &["262"]),
    ("Mexico", "MX", Assigned, &["52"]),
    ("Micronesia, Federated States Of", "FM", Assigned, &["691"]),
    ("Moldova", "MD", Assigned, &["373"]),
    ("Monaco", "MC", Assigned, &["377"]),
    ("Mongolia", "MN", Assigned, &["976"]),
    ("Montenegro", "ME", Assigned, &["382"]),
    ("Montserrat", "MS", Assigned, &["1"]),
    ("Morocco", "MA", Assigned, &["212"]),
    ("Mozambique", "MZ", Assigned, &["258"]),
    ("Myanmar", "MM", Assigned, &["95"]),
    ("Namibia", "NA", Assigned, &["264"]),
    ("Nauru", "NR", Assigned, &["674"]),
    ("Nepal", "NP", Assigned, &["977"]),
    ("Netherlands", "NL", Assigned, &["31"]),
    ("Netherlands Antilles", "AN", Deleted, &["599"]),
    ("New Caledonia", "NC", Assigned, &["687"]),
    ("New Zealand", "NZ", Assigned, &["64"]),
    ("Nicaragua", "NI", Assigned, &["505"]),
    ("Niger", "NE", Assigned, &["227"]),
    ("Nigeria", "NG", Assigned, &["234"]),
    ("Niue", "NU", Assigned, &["683"]),
    ("Norfolk Island", "NF", Assigned, &["672"]),
    ("North Macedonia", "MK", Assigned, &["389"]),
    ("Northern Mariana Islands", "MP", Assigned, &["1"]),
    ("Norway", "NO", Assigned, &["47"]),
    ("Oman", "OM", Assigned, &["968"]),
    ("Pakistan", "PK", Assigned, &["92"]),
    ("Palau", "PW", Assigned, &["680"]),
    ("Palestinian Territory, Occupied", "PS", Assigned, &["970"]),
    ("Panama", "PA", Assigned, &["507"]),
    ("Papua New Guinea", "PG", Assigned, &["675"]),
    ("Paraguay", "PY", Assigned, &["595"]),
    ("Peru", "PE", Assigned, &["51"]),
    ("Philippines", "PH", Assigned, &["63"]),
    ("Pitcairn", "PN", Assigned, &["872"]),
    ("Poland", "PL", Assigned, &["48"]),
    ("Portugal", "PT", Assigned, &["351"]),
    ("Puerto Rico", "PR", Assigned, &["1"]),
    ("Qatar", "QA", Assigned, &["974"]),
    ("Republic Of Congo", "CG", Assigned, &["242"]),
    ("Reunion", "RE", Assigned, &["262"]),
    ("Romania", "RO", Assigned, &["40"]),
    ("Russian Federation", "RU", Assigned, &["7"]),
    ("Rwanda", "RW", Assigned, &["250"]),
    ("Saint Barthélemy", "BL", Assigned, &["590"]),
    ("Saint Helena, Ascension And Tristan Da Cunha", "SH", Assigned, &["290"]),
    ("Saint Kitts And Nevis", "KN", Assigned, &["1"]),
    ("Saint Lucia", "LC", Assigned, &["1"]),
    ("Saint Martin", "MF", Assigned, &["590"]),
    ("Saint Pierre And Miquelon", "PM", Assigned, &["508"]),
    ("Saint Vincent And The Grenadines", "VC", Assigned, &["1"]),
    ("Samoa", "WS", Assigned, &["685"]),
    ("San Marino", "SM", Assigned, &["378"]),
    ("Sao Tome and Principe", "ST", Assigned, &["239"]),
    ("Saudi Arabia", "SA", Assigned, &["966"]),
    ("Senegal", "SN", Assigned, &["221"]),
    ("Serbia", "RS", Assigned, &["381"]),
    ("Serbia and Montenegro", "CS", Deleted, &["381"]),
    ("Seychelles", "SC", Assigned, &["248"]),
    ("Sierra Leone", "SL", Assigned, &["232"]),
    ("Singapore", "SG", Assigned, &["65"]),
    ("Sint Maarten", "SX", Assigned, &["1"]),
    ("Slovakia", "SK", Assigned, &["421"]),
    ("Slovenia", "SI", Assigned, &["386"]),
    ("Solomon Islands", "SB", Assigned, &["677"]),
    ("Somalia", "SO", Assigned, &["252"]),
    ("South Africa", "ZA", Assigned, &["27"]),
    ("South Georgia And The South Sandwich Islands", "GS", Assigned, &["500"]),
    ("South Sudan", "SS", Assigned, &["211"]),
    ("Spain", "ES", Assigned, &["34"]),
    ("Sri Lanka", "LK", Assigned, &["94"]),
    ("Sudan", "SD", Assigned, &["249"]),
    ("Suriname", "SR", Assigned, &["597"]),
    ("Svalbard And Jan Mayen", "SJ", Assigned, &["47"]),
    ("Sweden", "SE", Assigned, &["46"]),
    ("Switzerland", "CH", Assigned, &["41"]),
    ("Syrian Arab Republic", "SY", Assigned, &["963"]),
    ("Taiwan", "TW", Assigned, &["886"]),
    ("Tajikistan", "TJ", Assigned, &["992"]),
    ("Tanzania, United Republic Of", "TZ", Assigned, &["255"]),
    ("Thailand", "TH", Assigned, &["66"]),
    ("Timor-Leste", "TL", Assigned, &["670"]),
    ("Togo", "TG", Assigned, &["228"]),
    ("Tokelau", "TK", Assigned, &["690"]),
    ("Tonga", "TO", Assigned, &["676"]),
    ("Trinidad And Tobago", "TT", Assigned, &["1"]),
    ("Tunisia", "TN", Assigned, &["216"]),
    ("Turkey", "TR", Assigned, &["90"]),
    ("Turkmenistan", "TM", Assigned, &["993"]),
    ("Turks And Caicos Islands", "TC", Assigned, &["1"]),
    ("Tuvalu", "TV", Assigned, &["688"]),
    ("USSR", "SU", Reserved, &["7"]),
    ("Uganda", "UG", Assigned, &["256"]),
    ("Ukraine", "UA", Assigned, &["380"]),
    ("United Arab Emirates", "AE", Assigned, &["971"]),
    ("United Kingdom", "GB", Assigned, &["44"]),
    ("United States", "US", Assigned, &["1"]),
    ("United States Minor Outlying Islands", "UM", Assigned, &[]),
    ("Uruguay", "UY", Assigned, &["598"]),
    ("Uzbekistan", "UZ", Assigned, &["998"]),
    ("Vanuatu", "VU", Assigned, &["678"]),
    ("Vatican City State", "VA", Assigned, &["39", "379"]),
    ("Venezuela, Bolivarian Republic Of", "VE", Assigned, &["58"]),
    ("Viet Nam", "VN", Assigned, &["84"]),
    ("Virgin Islands (British)", "VG", Assigned, &["1"]),
    ("Virgin Islands (US)", "VI", Assigned, &["1"]),
    ("Wallis And Futuna", "WF", Assigned, &["681"]),
    ("Western Sahara", "EH", Assigned, &["212"]),
    ("Yemen", "YE", Assigned, &["967"]),
    ("Yugoslavia", "YU", Deleted, &["38"]),
    ("Zambia", "ZM", Assigned, &["260"]),
    ("Zimbabwe", "ZW", Assigned, &["263"]),
];
